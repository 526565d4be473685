use decwords::{normalize, parse_padded, to_digits, ConversionResult};

fn round_trip(input: &str) -> ConversionResult<()> {
    let words = parse_padded(input)?;
    let output = to_digits(&words)?;
    let canonical = normalize(input)?;

    println!("{:?}", words.words());
    println!("{} {} {}", input, output, canonical == output.as_str());
    Ok(())
}

fn main() {
    println!("decwords {} round trip", decwords::VERSION);
    println!("========================");

    let inputs = [
        "1123456789123456789123456789",
        "123123456789123456789",
        "00000123123456789123456789",
        "-42",
    ];

    for input in inputs {
        if let Err(err) = round_trip(input) {
            eprintln!("{}: {}", input, err);
        }
    }
}
