use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use cct::Method;

use crate::config::TableFormat;

#[derive(Parser, Debug)]
#[command(
    name = "cctool",
    version,
    about = "Correlated color temperature to chromaticity conversion, and back"
)]
pub struct Args {
    /// Configuration file (yaml). A missing file is not an error.
    #[arg(short, long, default_value = "cctool.yaml")]
    pub config: Utf8PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Chromaticity of a color temperature
    Forward {
        /// Temperature in Kelvin
        kelvin: f64,

        /// Distance from the Planckian locus (positive is greener)
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        duv: f64,

        /// Use the exact blackbody model instead of the polynomial approximation
        #[arg(short, long)]
        exact: bool,
    },

    /// Estimate temperature and Duv of a chromaticity
    Inverse {
        /// x (or u, with --uv)
        a: f64,

        /// y (or v, with --uv)
        b: f64,

        /// Estimation method [default, robertson1968, robertson-improved, ohno2013]
        #[arg(short, long)]
        method: Option<Method>,

        /// Interpret the coordinates as CIE 1960 (u, v)
        #[arg(long)]
        uv: bool,
    },

    /// Spectral power distribution of a blackbody
    Spectrum {
        /// Temperature in Kelvin
        kelvin: f64,

        /// Scale the spectrum to a peak of 1
        #[arg(short, long)]
        relative: bool,
    },

    /// Regenerate the isotherm lookup table
    Table {
        /// Output file
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<TableFormat>,
    },

    /// Round trip a range of temperatures, and report the worst errors
    Sweep {
        /// Estimation method [default, robertson1968, robertson-improved, ohno2013]
        #[arg(short, long)]
        method: Option<Method>,

        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        duv: f64,

        /// First temperature
        #[arg(long, default_value_t = 1000.0)]
        from: f64,

        /// Last temperature
        #[arg(long, default_value_t = 100_000.0)]
        to: f64,

        /// Multiplicative step between temperatures
        #[arg(long, default_value_t = 1.001)]
        ratio: f64,
    },
}
