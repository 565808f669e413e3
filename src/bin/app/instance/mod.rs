pub (crate) mod settings;
pub (crate) mod cache;

use self::settings::FilmstripSettings;
use self::cache::ThumbnailCache;

// Sample video used by every row, same as the original demo clip.
pub (crate) const SAMPLE_VIDEO_URL: &str =
    "https://devstreaming-cdn.apple.com/videos/wwdc/2018/236mwbxbxjfsvns4jan/236/236_hd_avspeechsynthesizer_making_ios_talk.mp4?dl=1";

const ROW_COUNT: usize = 6;

// A single entry in the demo list. The index is the row's identity and its cache key.
#[derive(Debug, Clone)]
pub (crate) struct VideoRow {
    index: usize,
    url: String
}

impl VideoRow {
    fn new(index: usize, url: impl Into<String>) -> Self {
        Self { index, url: url.into() }
    }

    pub (crate) fn index(&self) -> usize {
        self.index
    }

    pub (crate) fn url(&self) -> &str {
        &self.url
    }
}

// Collection of items that'll be used during the program's runtime.
pub (crate) struct FilmstripInstance {
    settings: FilmstripSettings,
    cache: ThumbnailCache,
    rows: Vec<VideoRow>
}

impl FilmstripInstance {
    pub (crate) fn new(settings: FilmstripSettings) -> Self {
        Self {
            settings,
            cache: ThumbnailCache::new(),
            rows: (0..ROW_COUNT)
                .map(|index| VideoRow::new(index, SAMPLE_VIDEO_URL))
                .collect()
        }
    }

    // Mutable and immutable getters
    pub (crate) fn settings(&self) -> &FilmstripSettings {
        &self.settings
    }

    pub (crate) fn settings_mut(&mut self) -> &mut FilmstripSettings {
        &mut self.settings
    }

    pub (crate) fn cache(&self) -> &ThumbnailCache {
        &self.cache
    }

    pub (crate) fn cache_mut(&mut self) -> &mut ThumbnailCache {
        &mut self.cache
    }

    pub (crate) fn rows(&self) -> &[VideoRow] {
        &self.rows
    }
}
