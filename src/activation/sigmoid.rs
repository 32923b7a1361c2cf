/// Logistic sigmoid σ(z) = 1 / (1 + e^-z). Applied element-wise by callers.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of the sigmoid: σ'(z) = σ(z) · (1 - σ(z)).
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}
