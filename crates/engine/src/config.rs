use crate::encoding::EncodingProfile;
use crate::options::CountMode;
use crate::source::Source;
use derive_builder::Builder;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub sources: Vec<Source>,
    #[builder(default)]
    pub mode: CountMode,
    /// Resolved once per invocation and injected here; the engine never
    /// inspects the process locale itself.
    #[builder(default)]
    pub encoding: EncodingProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![],
            mode: CountMode::default(),
            encoding: EncodingProfile::default(),
        }
    }
}
