mod ffmpeg_extractor;

pub use ffmpeg_extractor::FfmpegAudioExtractor;
