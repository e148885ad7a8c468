use std::io::Write;

use camino::Utf8Path;

use cct::table::IsothermTable;
use cct::{BLACKBODY_MAX_KELVIN, BLACKBODY_MIN_KELVIN, Cct, Method, UV, UVPrime, XY};

use crate::args::Command;
use crate::config::{AppConfig, TableFormat};
use crate::error::{AppError, AppResult};
use crate::sweep;

pub fn execute(out: &mut impl Write, config: &AppConfig, command: Command) -> AppResult<()> {
    match command {
        Command::Forward { kelvin, duv, exact } => forward(out, config, Cct::new(kelvin, duv), exact),
        Command::Inverse { a, b, method, uv } => {
            let uv = if uv { UV::new(a, b) } else { XY::new(a, b).into() };
            inverse(out, config, uv, method.unwrap_or(config.cct.method))
        }
        Command::Spectrum { kelvin, relative } => spectrum(out, kelvin, relative),
        Command::Table { output, format } => {
            let output = output.unwrap_or_else(|| config.table.output.clone());
            let format = format.unwrap_or(config.table.format);
            let table = IsothermTable::generate();
            write_table(&table, &output, format)?;
            writeln!(out, "Wrote {} isotherms to {output}", table.len())?;
            Ok(())
        }
        Command::Sweep {
            method,
            duv,
            from,
            to,
            ratio,
        } => {
            let method = method.unwrap_or(config.cct.method);
            writeln!(out, "{method}, Duv {duv:+}")?;
            for report in sweep::run(method, duv, from, to, ratio)? {
                writeln!(out, "{report}")?;
            }
            Ok(())
        }
    }
}

pub fn forward(out: &mut impl Write, config: &AppConfig, cct: Cct, exact: bool) -> AppResult<()> {
    let xy = if exact { cct.xy_exact() } else { cct.xy() };
    if !xy.is_finite() {
        return Err(AppError::TemperatureOutOfRange(cct.kelvin));
    }

    let p = config.cct.precision;
    writeln!(out, "{cct}")?;
    writeln!(out, "  xy    {xy:.p$}")?;
    writeln!(out, "  uv    {:.p$}", UV::from(xy))?;
    writeln!(out, "  u'v'  {:.p$}", UVPrime::from(xy))?;
    writeln!(out, "  sRGB  {}", cct::colorspace::SRGB.xy_to_rgb8(xy))?;
    Ok(())
}

pub fn inverse(out: &mut impl Write, config: &AppConfig, uv: UV, method: Method) -> AppResult<()> {
    let found = Cct::from_uv(uv, method);
    let p = config.cct.precision;

    writeln!(out, "{found}")?;
    if found.is_valid() {
        writeln!(out, "  mired {:.p$}", found.mired())?;
    } else {
        log::warn!("{method} cannot place {uv:.p$}");
    }
    Ok(())
}

pub fn spectrum(out: &mut impl Write, kelvin: f64, relative: bool) -> AppResult<()> {
    if !(BLACKBODY_MIN_KELVIN..=BLACKBODY_MAX_KELVIN).contains(&kelvin) {
        return Err(AppError::TemperatureOutOfRange(kelvin));
    }

    let mut spd = Cct::locus(kelvin).spectrum();
    if relative {
        spd = spd.relative();
    }

    for (wavelength, value) in spd.iter() {
        writeln!(out, "{wavelength:.0}\t{value:.6e}")?;
    }
    Ok(())
}

pub fn write_table(table: &IsothermTable, output: &Utf8Path, format: TableFormat) -> AppResult<()> {
    let text = match format {
        TableFormat::Json => table.to_json()?,
        TableFormat::Yaml => serde_yml::to_string(table)?,
    };

    std::fs::write(output, text).map_err(|err| AppError::TableWrite(output.to_path_buf(), err))?;
    log::info!("Isotherm table ({} entries) written to {output}", table.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use cct::{Cct, Method, UV, XY};

    use crate::args::Command;
    use crate::commands::{execute, forward, inverse, spectrum};
    use crate::config::parse_str;
    use crate::error::AppError;

    fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = vec![];
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn forward_warm_white() {
        let config = parse_str("").unwrap();
        let text = output(|out| forward(out, &config, Cct::new(2700.0, 0.01), false).unwrap());
        assert!(text.starts_with("2700K Duv +0.0100\n"));
        assert!(text.contains("sRGB  #ffb32b"));
        assert!(text.contains("xy    x="));
    }

    #[test]
    fn forward_out_of_range() {
        let config = parse_str("").unwrap();
        let mut out = vec![];
        assert!(matches!(
            forward(&mut out, &config, Cct::locus(1000.0), false),
            Err(AppError::TemperatureOutOfRange(_))
        ));
        assert!(forward(&mut out, &config, Cct::locus(1000.0), true).is_ok());
    }

    #[test]
    fn inverse_locus_point() {
        let config = parse_str("").unwrap();
        let uv = UV::from(Cct::locus(5000.0).xy());
        let text = output(|out| inverse(out, &config, uv, Method::Default).unwrap());
        assert!(text.starts_with("5000K Duv "));
        assert!(text.contains("mired 200.0"));
    }

    #[test]
    fn inverse_invalid() {
        let config = parse_str("").unwrap();
        let uv = XY::new(0.1, 0.1).into();
        let text = output(|out| inverse(out, &config, uv, Method::Ohno2013).unwrap());
        assert_eq!(text, "invalid\n");
    }

    #[test]
    fn spectrum_rows() {
        let text = output(|out| spectrum(out, 5000.0, true).unwrap());
        assert_eq!(text.lines().count(), 81);
        assert!(text.starts_with("380\t"));
        assert!(spectrum(&mut vec![], 50.0, false).is_err());
    }

    #[test]
    fn sweep_uses_configured_method() {
        let config = parse_str("cct:\n  method: ohno2013\n").unwrap();
        let command = Command::Sweep {
            method: None,
            duv: 0.0,
            from: 3000.0,
            to: 4000.0,
            ratio: 1.01,
        };
        let text = output(|out| execute(out, &config, command).unwrap());
        assert!(text.starts_with("ohno2013, Duv +0\n"));
        assert_eq!(text.lines().count(), 2);
    }
}
