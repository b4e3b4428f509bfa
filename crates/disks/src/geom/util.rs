/// Smallest `h` with `h² ≥ n`.
pub fn ceil_sqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    // float estimate, then Newton steps, then exact correction
    let mut x = (n as f64).sqrt() as u128;
    for _ in 0..4 {
        if x == 0 {
            break;
        }
        x = (x + n / x) / 2;
    }
    while x.checked_mul(x).is_none_or(|sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).is_some_and(|sq| sq <= n) {
        x += 1;
    }
    if x * x == n {
        x
    } else {
        x + 1
    }
}

pub(crate) fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
