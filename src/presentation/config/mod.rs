mod settings;

pub use settings::{
    MediaSettings, ServerSettings, Settings, SettingsError, TranscriptionSettings,
    TranslationSettings,
};
