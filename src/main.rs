// This binary crate is intentionally minimal.
// All trainer logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example points
fn main() {
    println!("gradnet: a from-scratch feedforward network trainer in Rust.");
    println!("Run `cargo run --example points` to train on the separable 2-D demo dataset.");
    println!("Run `cargo run --example xor` for the XOR demo.");
}
