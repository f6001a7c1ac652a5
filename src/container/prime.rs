//! Primality test used to maintain the prime view.

/// Returns `true` if `number` is prime.
///
/// Uses trial division by every candidate up to the integer square root.
/// Values below 2 are never prime.
///
/// # Complexity
///
/// O(sqrt(n))
///
/// # Examples
///
/// ```rust
/// use magical_container::MagicalContainer;
///
/// assert!(MagicalContainer::is_prime(2));
/// assert!(MagicalContainer::is_prime(97));
/// assert!(!MagicalContainer::is_prime(1));
/// assert!(!MagicalContainer::is_prime(-7));
/// assert!(!MagicalContainer::is_prime(91));
/// ```
#[must_use]
pub const fn is_prime(number: i32) -> bool {
    if number < 2 {
        return false;
    }
    // divisor <= number / divisor avoids overflowing divisor * divisor near i32::MAX
    let mut divisor = 2;
    while divisor <= number / divisor {
        if number % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}
