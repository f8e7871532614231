use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind::Usage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    Basic,
    BasicPlus,
    Variant,
    VariantPlus,
}

impl Scheme {
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code {
            "1" => Ok(Scheme::Basic),
            "2" => Ok(Scheme::BasicPlus),
            "3" => Ok(Scheme::Variant),
            "4" => Ok(Scheme::VariantPlus),
            _ => Err(Usage("First argument should belong in the range [1, 4]".to_string()).into()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Basic => "Basic",
            Scheme::BasicPlus => "BasicPlus",
            Scheme::Variant => "Variant",
            Scheme::VariantPlus => "VariantPlus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExponentLength {
    Full,
    Short,
}

impl ExponentLength {
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code {
            "f" => Ok(ExponentLength::Full),
            "s" => Ok(ExponentLength::Short),
            _ => Err(Usage(
                "Fourth argument should be either 'f' for full sized exponents or 's' for short sized exponents"
                    .to_string(),
            )
            .into()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExponentLength::Full => "full",
            ExponentLength::Short => "short",
        }
    }
}

/// Everything needed to locate the two timing tables of one parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub scheme: Scheme,
    pub conductor: String,
    pub discriminant: String,
    pub exponent_length: ExponentLength,
    pub root: PathBuf,
}

impl ReportConfig {
    pub fn from_codes(
        scheme: &str,
        conductor: &str,
        discriminant: &str,
        exponent_length: &str,
        root: &Path,
    ) -> Result<Self, Error> {
        Ok(Self {
            scheme: Scheme::from_code(scheme)?,
            conductor: conductor.to_string(),
            discriminant: discriminant.to_string(),
            exponent_length: ExponentLength::from_code(exponent_length)?,
            root: root.to_path_buf(),
        })
    }

    /// `<root>/<scheme>/<conductor>/<discriminant>/<explen>_<suffix>.txt`
    pub fn table_path(&self, suffix: &str) -> PathBuf {
        self.root
            .join(self.scheme.name())
            .join(&self.conductor)
            .join(&self.discriminant)
            .join(format!("{}_{}.txt", self.exponent_length.name(), suffix))
    }
}
