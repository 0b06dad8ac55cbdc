use crate::cli::Args;
use config::{Config, File, FileFormat};
use log::info;
use std::path::{Path, PathBuf};
use zscalerranges::{Error, IpFormat, OutputFormat, RenderMode, Result};

/*-------------------------------------------------------------------------------------------------
  Run Configuration
-------------------------------------------------------------------------------------------------*/

/// Config file read from the working directory when present and not disabled. When used, it
/// supplies all run parameters; command-line flags and the config file are mutually exclusive
/// per run.
pub const CONFIG_FILE: &str = "config.ini";

/// Fully resolved and validated parameters for one run. Built before any data is fetched; every
/// contradiction or omission is rejected here.
#[derive(Debug)]
pub struct RunConfig {
    pub cloud: String,
    pub regions: Option<Vec<String>>,
    pub datacenters: Option<Vec<String>>,
    pub mode: RenderMode,
    pub path: Option<PathBuf>,
}

/*--------------------------------------------------------------------------------------
  Resolution
--------------------------------------------------------------------------------------*/

/// Resolve the run configuration from the config file or the command-line arguments.
pub fn resolve(args: &Args) -> Result<RunConfig> {
    let run_config = if Path::new(CONFIG_FILE).is_file() && !args.no_config {
        info!("Reading run parameters from {CONFIG_FILE}");
        from_config_file(CONFIG_FILE)?
    } else {
        from_args(args)?
    };

    validate_csv_path(&run_config)?;
    Ok(run_config)
}

fn from_config_file(path: &str) -> Result<RunConfig> {
    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Ini))
        .build()?;

    let ipformat: IpFormat = settings.get_string("parameters.iptype")?.parse()?;
    let output_format: OutputFormat = settings.get_string("parameters.format")?.parse()?;

    Ok(RunConfig {
        cloud: settings.get_string("default.cloud")?,
        regions: split_list(&settings.get_string("default.regions").unwrap_or_default()),
        datacenters: split_list(&settings.get_string("default.datacenters").unwrap_or_default()),
        mode: RenderMode::resolve(ipformat, output_format)?,
        path: Some(settings.get_string("parameters.path").unwrap_or_default())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from),
    })
}

fn from_args(args: &Args) -> Result<RunConfig> {
    let cloud = args
        .cloud
        .clone()
        .ok_or_else(|| Error::Configuration("ZScaler Cloud not specified".to_string()))?;

    let ipformat: IpFormat = args
        .ipformat
        .as_deref()
        .ok_or_else(|| incomplete("ipformat"))?
        .parse()?;

    // The "all" ipformat implies CSV output; an omitted output format is filled in, while an
    // explicit contradictory one is rejected by RenderMode::resolve.
    let output_format: OutputFormat = match (&args.output_format, ipformat) {
        (None, IpFormat::All) => OutputFormat::All,
        (None, _) => return Err(incomplete("output format")),
        (Some(value), _) => value.parse()?,
    };

    Ok(RunConfig {
        cloud,
        regions: args.regions.as_deref().and_then(split_list),
        datacenters: args.datacenters.as_deref().and_then(split_list),
        mode: RenderMode::resolve(ipformat, output_format)?,
        path: args.path.clone(),
    })
}

fn incomplete(parameter: &str) -> Error {
    Error::Configuration(format!(
        "incomplete command-line arguments: {parameter} not specified; run --help for more info"
    ))
}

/// Split a comma-separated allow-list. Empty input means "no filter"; entries are not trimmed,
/// matching the exact-equality filter contract.
fn split_list(value: &str) -> Option<Vec<String>> {
    if value.is_empty() {
        None
    } else {
        Some(value.split(',').map(str::to_string).collect())
    }
}

/// The CSV destination directory must exist before any data is fetched or transformed, not be
/// discovered missing at write time.
fn validate_csv_path(run_config: &RunConfig) -> Result<()> {
    if run_config.mode == RenderMode::Csv {
        if let Some(path) = &run_config.path {
            if !path.is_dir() {
                return Err(Error::NotADirectory(path.clone()));
            }
        }
    }
    Ok(())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use zscalerranges::ValueFormat;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("zscalerranges").chain(argv.iter().copied()))
    }

    #[test]
    fn test_from_args_listing_mode() {
        let run_config = from_args(&args(&[
            "--cloud",
            "zscaler.net",
            "--regions",
            "Americas,EMEA",
            "--ipformat",
            "cidr",
            "--output-format",
            "simple",
        ]))
        .unwrap();

        assert_eq!(run_config.cloud, "zscaler.net");
        assert_eq!(
            run_config.regions.as_deref(),
            Some(&["Americas".to_string(), "EMEA".to_string()][..])
        );
        assert_eq!(run_config.datacenters, None);
        assert_eq!(run_config.mode, RenderMode::Simple(ValueFormat::Cidr));
    }

    #[test]
    fn test_from_args_datacenter_names_are_not_trimmed() {
        let run_config = from_args(&args(&[
            "-c",
            "zscaler.net",
            "-d",
            "Atlanta II, Boston I",
            "-i",
            "range",
            "-o",
            "bydatacenter",
        ]))
        .unwrap();

        // " Boston I" keeps its leading space; matching is exact.
        assert_eq!(
            run_config.datacenters.as_deref(),
            Some(&["Atlanta II".to_string(), " Boston I".to_string()][..])
        );
    }

    #[test]
    fn test_from_args_missing_cloud() {
        let error = from_args(&args(&["-i", "cidr", "-o", "simple"])).unwrap_err();
        assert!(matches!(error, Error::Configuration(_)));
        assert!(error.to_string().contains("Cloud not specified"));
    }

    #[test]
    fn test_from_args_missing_formats() {
        assert!(from_args(&args(&["-c", "zscaler.net"])).is_err());
        assert!(from_args(&args(&["-c", "zscaler.net", "-i", "cidr"])).is_err());
    }

    #[test]
    fn test_from_args_all_ipformat_forces_csv_mode() {
        let run_config = from_args(&args(&["-c", "zscaler.net", "-i", "all"])).unwrap();
        assert_eq!(run_config.mode, RenderMode::Csv);
    }

    #[test]
    fn test_from_args_all_ipformat_rejects_other_output_format() {
        let error =
            from_args(&args(&["-c", "zscaler.net", "-i", "all", "-o", "simple"])).unwrap_err();
        assert!(matches!(error, Error::Configuration(_)));
    }

    #[test]
    fn test_from_args_unrecognized_ipformat() {
        assert!(from_args(&args(&["-c", "zscaler.net", "-i", "netmask", "-o", "simple"])).is_err());
    }

    #[test]
    fn test_from_args_formats_case_insensitive() {
        let run_config = from_args(&args(&[
            "-c",
            "zscaler.net",
            "-i",
            "WILDCARD",
            "-o",
            "ByDatacenter",
        ]))
        .unwrap();
        assert_eq!(
            run_config.mode,
            RenderMode::ByDatacenter(ValueFormat::Wildcard)
        );
    }

    #[test]
    fn test_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[Default]").unwrap();
        writeln!(file, "Cloud = zscaler.net").unwrap();
        writeln!(file, "Regions = Americas").unwrap();
        writeln!(file, "Datacenters =").unwrap();
        writeln!(file, "[Parameters]").unwrap();
        writeln!(file, "IPType = cidr").unwrap();
        writeln!(file, "Format = simple").unwrap();
        writeln!(file, "Path =").unwrap();

        let run_config = from_config_file(path.to_str().unwrap()).unwrap();
        assert_eq!(run_config.cloud, "zscaler.net");
        assert_eq!(run_config.regions.as_deref(), Some(&["Americas".to_string()][..]));
        assert_eq!(run_config.datacenters, None);
        assert_eq!(run_config.mode, RenderMode::Simple(ValueFormat::Cidr));
        assert_eq!(run_config.path, None);
    }

    #[test]
    fn test_validate_csv_path_rejects_missing_directory() {
        let run_config = from_args(&args(&[
            "-c",
            "zscaler.net",
            "-i",
            "all",
            "-p",
            "/no/such/directory",
        ]))
        .unwrap();

        let error = validate_csv_path(&run_config).unwrap_err();
        assert!(matches!(error, Error::NotADirectory(_)));
    }

    #[test]
    fn test_validate_csv_path_ignores_path_for_listing_modes() {
        let run_config = from_args(&args(&[
            "-c",
            "zscaler.net",
            "-i",
            "cidr",
            "-o",
            "simple",
            "-p",
            "/no/such/directory",
        ]))
        .unwrap();

        assert!(validate_csv_path(&run_config).is_ok());
    }
}
