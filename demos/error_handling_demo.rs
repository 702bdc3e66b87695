// demos/error_handling_demo.rs
use diffusion_process::{DiffusionError, DiffusionProcess, LogPriceDiffusion, LogPriceParams};

fn main() {
    println!("Error Handling Demo for diffusion-process");
    println!("=========================================\n");

    // Test 1: Non-positive initial price
    println!("1. Testing zero initial price...");
    match LogPriceDiffusion::new(0.05, 0.2, 0.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Negative volatility
    println!("\n2. Testing negative volatility...");
    let invalid_vol = LogPriceParams {
        volatility: -0.1,
        ..Default::default()
    };
    match LogPriceDiffusion::from_params(invalid_vol) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Negative rate is a valid input
    println!("\n3. Testing negative rate...");
    match LogPriceDiffusion::new(-0.01, 0.2, 100.0) {
        Ok(p) => println!("   ✓ Created with drift {:.4}", p.drift(0.0, p.x0())),
        Err(e) => println!("   Error: {}", e),
    }

    // Test 4: Degenerate transition law
    println!("\n4. Testing zero-volatility transition law...");
    let flat = LogPriceDiffusion::new(0.05, 0.0, 100.0).expect("Valid parameters");
    match flat.transition_distribution(0.0, 0.0, 1.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(DiffusionError::DegenerateDistribution { mean, .. }) => {
            println!("   ✓ Point mass at {:.4}", mean)
        }
        Err(e) => println!("   Error: {}", e),
    }
}
