use clap::Parser;
use iirfilter::FilterConfig;

/// Print the impulse and magnitude response of a configured IIR filter
#[derive(Parser, Debug)]
#[command(name = "frequency_response")]
struct Args {
    /// TOML filter config (order, a_coeffs, b_coeffs)
    config: Option<std::path::PathBuf>,

    /// Sample rate in Hz
    #[arg(short = 's', long, default_value = "48000")]
    sample_rate: f64,

    /// Number of impulse response samples to print
    #[arg(short = 'n', long, default_value = "16")]
    impulse_len: usize,

    /// Number of frequency points between DC and Nyquist
    #[arg(short = 'p', long, default_value = "12")]
    points: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FilterConfig::load(path)?,
        None => FilterConfig::default(),
    };
    let mut filter = config.build()?;

    println!("=== IIR Filter Response ===\n");
    println!("Order: {}", filter.order());
    println!("a: {:?}", filter.a_coeffs());
    println!("b: {:?}", filter.b_coeffs());

    println!("\nImpulse response:");
    for n in 0..args.impulse_len {
        let x = if n == 0 { 1.0 } else { 0.0 };
        println!("{:>4} {:>14.8}", n, filter.process(x));
    }

    println!("\n{:<12} {:<12} {:<12}", "Freq (Hz)", "Gain (dB)", "Phase (deg)");
    println!("{}", "-".repeat(36));
    let nyquist = args.sample_rate / 2.0;
    let steps = args.points.max(1);
    for i in 0..=steps {
        let freq = nyquist * i as f64 / steps as f64;
        let h = filter.frequency_response(freq, args.sample_rate)?;
        let gain_db = filter.magnitude_db(freq, args.sample_rate)?;
        println!(
            "{:<12.1} {:<12.2} {:<12.1}",
            freq,
            gain_db,
            h.arg().to_degrees()
        );
    }

    Ok(())
}
