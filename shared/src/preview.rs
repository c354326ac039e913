/// Inline preview of the most recently selected image.
///
/// Selecting a file bumps the generation; the asynchronous file read reports
/// back with the generation it was started for, so a slow read of an older
/// file can never overwrite a newer selection.
#[derive(Debug, Default)]
pub struct ImagePreview {
    source: Option<String>,
    generation: u64,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new selection. Returns the generation to tag the file read
    /// with, or `None` when the selection was cleared.
    pub fn select(&mut self, has_file: bool) -> Option<u64> {
        self.generation += 1;
        if has_file {
            Some(self.generation)
        } else {
            self.source = None;
            None
        }
    }

    /// Applies a finished file read. Returns whether the view changed.
    pub fn loaded(&mut self, generation: u64, result: Result<String, String>) -> bool {
        if generation != self.generation {
            log::warn!(
                "Dropping stale preview load (generation {}, current {})",
                generation,
                self.generation
            );
            return false;
        }
        match result {
            Ok(data_url) => self.source = Some(data_url),
            Err(e) => {
                log::warn!("Failed to read selected image: {}", e);
                self.source = None;
            }
        }
        true
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn image_visible(&self) -> bool {
        self.source.is_some()
    }

    pub fn placeholder_visible(&self) -> bool {
        !self.image_visible()
    }
}
