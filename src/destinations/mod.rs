use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub mod crop_positions;
pub mod titles;

/// One entry of the destination catalog. Any other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Destination {
    pub slug: String,
    pub name: String,
}

/// Read the destination catalog (a JSON array of objects)
pub fn load_catalog(path: &Path) -> io::Result<Vec<Destination>> {
    let json_content = fs::read_to_string(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read catalog {}: {}", path.display(), e),
        )
    })?;

    let destinations: Vec<Destination> = serde_json::from_str(&json_content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse catalog JSON: {}", e),
        )
    })?;

    Ok(destinations)
}

/// Apply the `--amount` flag: "all" keeps everything, a number truncates
pub fn limit_destinations(
    mut destinations: Vec<Destination>,
    amount: Option<&str>,
) -> io::Result<Vec<Destination>> {
    if let Some(amt) = amount {
        if amt != "all" {
            if let Ok(limit) = amt.parse::<usize>() {
                destinations.truncate(limit);
            } else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Invalid amount value",
                ));
            }
        }
    }
    Ok(destinations)
}
