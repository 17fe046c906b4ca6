use bollcore::prelude::{EngineError, EngineResult, SpectrumSource};
use bollcore::spectral::{CaptureInfo, SpectralSample, Spectrum};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::PathBuf;

/// Reads the two-column reflectance table: first column wavelength in
/// nm, second column reflectance. An optional header row and any
/// extra columns are ignored; rows that do not parse as numbers are
/// skipped.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SpectrumSource for FileSource {
    fn produce(&mut self) -> EngineResult<Spectrum> {
        let file = File::open(&self.path).map_err(|err| {
            EngineError::InvalidInput(format!("opening {}: {}", self.path.display(), err))
        })?;
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut samples = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|err| {
                EngineError::InvalidInput(format!("row {}: {}", row + 1, err))
            })?;
            if record.len() < 2 {
                return Err(EngineError::InvalidInput(
                    "table needs wavelength and reflectance columns".to_string(),
                ));
            }
            match (record[0].parse::<f32>(), record[1].parse::<f32>()) {
                (Ok(wavelength_nm), Ok(reflectance)) => samples.push(SpectralSample {
                    wavelength_nm,
                    reflectance,
                }),
                // header row or stray text
                _ => continue,
            }
        }

        if samples.is_empty() {
            return Err(EngineError::InvalidInput(
                "no usable rows in table".to_string(),
            ));
        }

        Ok(Spectrum::new(
            samples,
            CaptureInfo {
                source: self.path.display().to_string(),
                description: None,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_table(contents: &str) -> tempfile::TempPath {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(contents.as_bytes()).unwrap();
        temp.into_temp_path()
    }

    #[test]
    fn reads_header_and_extra_columns() {
        let path = write_table(
            "Wavelength,Reflectance,Site\n400.0,0.05,north\n500.0,0.12,north\n600.0,0.08,north\n",
        );
        let mut source = FileSource::new(path.to_path_buf());
        let spectrum = source.produce().unwrap();
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum.samples[0].wavelength_nm, 400.0);
        assert_eq!(spectrum.samples[2].reflectance, 0.08);
    }

    #[test]
    fn reads_headerless_table() {
        let path = write_table("400,0.05\n500,0.12\n");
        let mut source = FileSource::new(path.to_path_buf());
        assert_eq!(source.produce().unwrap().len(), 2);
    }

    #[test]
    fn single_column_is_a_load_failure() {
        let path = write_table("400\n500\n");
        let mut source = FileSource::new(path.to_path_buf());
        assert!(matches!(
            source.produce(),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn header_only_table_is_a_load_failure() {
        let path = write_table("Wavelength,Reflectance\n");
        let mut source = FileSource::new(path.to_path_buf());
        assert!(matches!(
            source.produce(),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let mut source = FileSource::new(PathBuf::from("/nonexistent/spectrum.csv"));
        assert!(source.produce().is_err());
    }
}
