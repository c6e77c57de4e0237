use single_neuron::{normalization_constants, normalize, Matrix, Neuron};

fn main() {
    // Two clusters of 2-feature points; class 1 sits up and to the right.
    let samples = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![5.0, 5.0],
        vec![6.0, 5.0],
        vec![5.0, 6.0],
        vec![6.0, 6.0],
    ]);
    let labels = Matrix::from_data(vec![vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]]);

    // Standardize the features, then flip to the (nx, m) layout the neuron expects.
    let (mean, std) = normalization_constants(&samples);
    let x = normalize(&samples, &mean, &std).transpose();

    let mut neuron = Neuron::new(2).expect("nx must be positive");
    let (prediction, cost) = neuron
        .train(&x, &labels, Neuron::DEFAULT_ITERATIONS, Neuron::DEFAULT_ALPHA)
        .expect("training parameters must be valid");

    println!("Final cost: {cost:.6}");
    for (i, sample) in samples.data.iter().enumerate() {
        println!(
            "Input: {:?} -> Predicted: {} (label {})",
            sample, prediction.data[0][i], labels.data[0][i]
        );
    }
}
