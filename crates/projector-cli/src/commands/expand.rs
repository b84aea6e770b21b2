//! `projector expand` and the bare `projector FILE` generator form.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

use projector_adapters::{LocalSource, YamlCodec};
use projector_core::application::{ExpandService, GenerateSummary};

use crate::{
    cli::ExpandArgs,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Expand the ArgoCDProject named by `args`.
///
/// With `report` unset (generator form) nothing but manifests is written.
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: ExpandArgs, output: OutputManager, report: bool) -> CliResult<()> {
    let service = build_service();

    let summary = match &args.output {
        Some(path) => generate_to_file(&service, &args.input, path)?,
        None => generate_to_stdout(&service, &args.input)?,
    };

    if report {
        if summary.applications == 0 {
            output.warning(&format!(
                "Project '{}' has no applicationTemplates; only the AppProject was generated",
                summary.project
            ))?;
        }
        output.summary(&summary)?;
        if let Some(path) = &args.output {
            output.info(&format!("Manifests written to {}", path.display()))?;
        }
    }
    Ok(())
}

fn build_service() -> ExpandService {
    ExpandService::new(Box::new(LocalSource::new()), Box::new(YamlCodec::new()))
}

fn generate_to_stdout(service: &ExpandService, input: &Path) -> CliResult<GenerateSummary> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    Ok(service.generate(input, &mut out)?)
}

/// The file is only created once every document has been produced.
fn generate_to_file(
    service: &ExpandService,
    input: &Path,
    destination: &Path,
) -> CliResult<GenerateSummary> {
    let mut buffer: Vec<u8> = Vec::new();
    let summary = service.generate(input, &mut buffer)?;

    debug!(bytes = buffer.len(), path = %destination.display(), "Writing manifests");
    let mut file = std::fs::File::create(destination)
        .with_cli_context(|| format!("Failed to create '{}'", destination.display()))?;
    file.write_all(&buffer)
        .with_cli_context(|| format!("Failed to write '{}'", destination.display()))?;

    Ok(summary)
}
