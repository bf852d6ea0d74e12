use crate::{
    catalog::{Catalog, MediaItem},
    core::Seconds,
    ease::Ease,
    error::KeepsakeResult,
    script::{CounterSpec, Line, Script},
};

/// Chainable script construction; validation happens at `build()`.
pub struct ScriptBuilder {
    messages: Vec<Line>,
    wishes: Vec<Line>,
    counter: Option<CounterSpec>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            wishes: Vec::new(),
            counter: None,
        }
    }

    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(Line::text(text));
        self
    }

    /// A message line resolved by the surface (e.g. the counter sentence).
    pub fn composite_message(mut self, render_id: impl Into<String>) -> Self {
        self.messages.push(Line::composite(render_id));
        self
    }

    pub fn wish(mut self, text: impl Into<String>) -> Self {
        self.wishes.push(Line::text(text));
        self
    }

    /// Host the counter on the most recently added message line.
    pub fn counter(mut self, from: i64, to: i64, duration: Seconds) -> Self {
        let line = self.messages.len().saturating_sub(1);
        self.counter = Some(CounterSpec {
            line,
            from,
            to,
            duration,
            ease: Ease::OutCubic,
        });
        self
    }

    pub fn build(self) -> KeepsakeResult<Script> {
        let script = Script {
            messages: self.messages,
            wishes: self.wishes,
            counter: self.counter,
        };
        script.validate()?;
        Ok(script)
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct CatalogBuilder {
    photos: Vec<MediaItem>,
    videos: Vec<MediaItem>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            videos: Vec::new(),
        }
    }

    pub fn photo(mut self, id: impl Into<String>, source: impl Into<String>) -> Self {
        self.photos.push(MediaItem {
            id: id.into(),
            source: source.into(),
            title: None,
            date: None,
        });
        self
    }

    pub fn video(
        mut self,
        id: impl Into<String>,
        source: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.videos.push(MediaItem {
            id: id.into(),
            source: source.into(),
            title: Some(title.into()),
            date: None,
        });
        self
    }

    pub fn build(self) -> KeepsakeResult<Catalog> {
        let catalog = Catalog {
            photos: self.photos,
            videos: self.videos,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_expected_script() {
        let script = ScriptBuilder::new()
            .message("hello")
            .message("again")
            .composite_message("days-together")
            .counter(0, 425, Seconds(4.0))
            .message("last")
            .wish("be well")
            .build()
            .unwrap();

        assert_eq!(script.messages.len(), 4);
        assert_eq!(script.wishes.len(), 1);
        let counter = script.counter.unwrap();
        assert_eq!(counter.line, 2);
        assert_eq!(counter.to, 425);
    }

    #[test]
    fn build_rejects_counter_without_messages() {
        // counter() on an empty builder points at line 0, which never exists.
        let result = ScriptBuilder::new().counter(0, 10, Seconds(1.0)).build();
        assert!(result.is_err());
    }

    #[test]
    fn catalog_builder_rejects_duplicates() {
        let result = CatalogBuilder::new()
            .photo("p1", "/image/a.jpg")
            .photo("p1", "/image/b.jpg")
            .build();
        assert!(result.is_err());
    }
}
