use canonical::{canonicalize_address, CanonicalizeConfig};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2001:0db8:0000:0000:0001:0000:0000:0001".to_string());

    match canonicalize_address(&input, &CanonicalizeConfig::default()) {
        Ok(addr) => {
            println!("canonical: {}", addr.canonical);
            println!("groups: {:?}", addr.groups);
            println!("compression: {:?}", addr.compression);
        }
        Err(err) => eprintln!("{err}"),
    }
}
