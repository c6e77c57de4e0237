// There is no CLI: the crate is a library around one Neuron and two
// normalization helpers. This binary only points newcomers at the demo.
fn main() {
    println!("single-neuron: a single sigmoid neuron for binary classification.");
    println!("Run `cargo run --example train` to train one on a toy dataset.");
}
