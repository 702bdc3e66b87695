// demos/log_price_demo.rs
use diffusion_process::{DiffusionProcess, LogPriceDiffusion};

fn main() {
    println!("Log-Price Diffusion Demo");
    println!("========================\n");

    let concrete = LogPriceDiffusion::new(0.05, 0.2, 100.0).expect("Valid parameters");
    let process: Box<dyn DiffusionProcess> = Box::new(concrete.clone());
    let x0 = process.x0();

    println!("rate = {}, volatility = {}", concrete.rate(), concrete.volatility());
    println!("x0 = ln(100) = {:.6}\n", x0);

    println!("{:>6} {:>12} {:>12} {:>12}", "dt", "E[Y]", "Var[Y]", "E[S]");
    for &dt in &[0.0, 0.25, 0.5, 1.0, 2.0] {
        println!(
            "{:>6.2} {:>12.6} {:>12.6} {:>12.4}",
            dt,
            process.expectation(0.0, x0, dt),
            process.variance(0.0, x0, dt),
            concrete.expected_price(0.0, x0, dt)
        );
    }

    let copy = process.clone();
    println!(
        "\nClone drift = {:.4}, diffusion = {:.4}",
        copy.drift(0.0, x0),
        copy.diffusion(0.0, x0)
    );

    match concrete.transition_distribution(0.0, x0, 1.0) {
        Ok(law) => println!("One-year transition law: {:?}", law),
        Err(e) => println!("No transition law: {}", e),
    }
}
