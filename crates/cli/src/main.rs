use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use stagebill_billing::{Invoice, Statement};
use stagebill_render::render_plain_text;
use stagebill_repertory::PlayCatalog;

fn main() -> ExitCode {
    stagebill_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [plays_path, invoice_path] = args.as_slice() else {
        eprintln!("usage: stagebill <plays.json> <invoice.json>");
        return ExitCode::FAILURE;
    };

    match run(Path::new(plays_path), Path::new(invoice_path)) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("statement generation failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(plays_path: &Path, invoice_path: &Path) -> anyhow::Result<String> {
    let catalog = load_catalog(plays_path)?;
    let invoice = load_invoice(invoice_path)?;

    tracing::info!(
        customer = %invoice.customer,
        performances = invoice.performances.len(),
        plays = catalog.len(),
        "preparing statement"
    );

    let statement = Statement::prepare(&invoice, &catalog)?;
    Ok(render_plain_text(&statement))
}

fn load_catalog(path: &Path) -> anyhow::Result<PlayCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading play catalog {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing play catalog {}", path.display()))
}

fn load_invoice(path: &Path) -> anyhow::Result<Invoice> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading invoice {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing invoice {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagebill_repertory::PlayId;

    #[test]
    fn catalog_and_invoice_parse_from_their_json_shapes() {
        let catalog: PlayCatalog = serde_json::from_str(
            r#"{
                "hamlet": {"name": "Hamlet", "type": "tragedy"},
                "as-like": {"name": "As You Like It", "type": "comedy"}
            }"#,
        )
        .unwrap();
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "customer": "BigCo",
                "performances": [
                    {"playID": "hamlet", "audience": 55},
                    {"playID": "as-like", "audience": 35}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(invoice.performances[0].play_id, PlayId::new("hamlet"));

        let statement = Statement::prepare(&invoice, &catalog).unwrap();
        assert_eq!(statement.total_amount(), 123_000);
        assert_eq!(statement.total_volume_credits(), 37);
    }

    #[test]
    fn missing_file_errors_carry_the_path() {
        let err = load_invoice(Path::new("does-not-exist.json")).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.json"));
    }
}
