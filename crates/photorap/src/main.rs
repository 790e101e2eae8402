use argh::FromArgs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use photorap_opensfm::{read_reconstruction, reconstruction_to_recording, ConversionOptions};
use photorap_recording::{ContainerWriter, Recording, RecordingWriter};

#[derive(FromArgs)]
/// Converts photogrammetry reconstruction data to recordings
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    OpenSfm(OpenSfmArgs),
}

#[derive(FromArgs)]
/// Convert an OpenSfM reconstruction file into a recording
#[argh(subcommand, name = "opensfm")]
struct OpenSfmArgs {
    /// path to the OpenSfM reconstruction file
    #[argh(option)]
    reconstruction: PathBuf,

    /// path to the output recording file
    #[argh(option)]
    out: PathBuf,

    /// path to a PLY mesh or point cloud to embed, may be repeated
    #[argh(option)]
    mesh: Vec<PathBuf>,

    /// per-axis scale applied to every mesh, as x,y,z (default 1,-1,1)
    #[argh(option, from_str_fn(parse_scale), default = "[1.0, -1.0, 1.0]")]
    mesh_scale: [f64; 3],
}

fn parse_scale(value: &str) -> Result<[f64; 3], String> {
    let parts = value
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid scale {value}: {e}"))?;

    parts
        .try_into()
        .map_err(|_| format!("scale must have three components, got {value}"))
}

// Write next to the destination, then move into place so a failure never
// leaves a partial file behind.
fn write_recording(out: &Path, recording: &Recording) -> Result<usize, Box<dyn std::error::Error>> {
    let dir = match out.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    let written = {
        let mut writer = ContainerWriter::new(BufWriter::new(file.as_file_mut()));
        writer.write(recording)?
    };
    file.as_file().sync_all()?;
    file.persist(out)?;

    Ok(written)
}

fn run_opensfm(args: OpenSfmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConversionOptions {
        mesh_scale: args.mesh_scale,
    };

    let recon = read_reconstruction(&args.reconstruction)?;
    let recording = reconstruction_to_recording(&recon, &options, &args.mesh)?;
    let written = write_recording(&args.out, &recording)?;

    log::info!(
        "wrote {} ({written} bytes): {} subjects, {} captures, {} assets",
        args.out.display(),
        recording.subjects().len(),
        recording.capture_count(),
        recording.binaries().len()
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let res = match args.command {
        Command::OpenSfm(args) => run_opensfm(args),
    };

    if let Err(err) = res {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("1,-1,1").unwrap(), [1.0, -1.0, 1.0]);
        assert_eq!(parse_scale(" 2.5, 1 ,0.5").unwrap(), [2.5, 1.0, 0.5]);
        assert!(parse_scale("1,2").is_err());
        assert!(parse_scale("1,a,3").is_err());
    }

    #[test]
    fn test_write_recording_replaces_destination() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.rap");
        std::fs::write(&out, b"stale")?;

        let recording = Recording::new("opensfm", "Open SFM");
        let written = write_recording(&out, &recording)?;

        let bytes = std::fs::read(&out)?;
        assert_eq!(bytes.len(), written);
        assert_eq!(photorap_recording::read_recording(&bytes)?, recording);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_run_opensfm_leaves_no_output_on_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let reconstruction = dir.path().join("reconstruction.json");
        std::fs::write(&reconstruction, "[{}, {}]")?;
        let out = dir.path().join("out.rap");

        let res = run_opensfm(OpenSfmArgs {
            reconstruction,
            out: out.clone(),
            mesh: vec![],
            mesh_scale: [1.0, -1.0, 1.0],
        });
        assert!(res.is_err());
        assert!(!out.exists());
        Ok(())
    }
}
