//! Byte-budgeted LRU cache of rasterized glyphs.
//!
//! Glyphs are rendered black on white the first time they are drawn and kept
//! until the running byte total would exceed the budget, at which point the
//! least recently drawn glyphs are dropped first.

use lru::LruCache;
use log::debug;

use crate::glyph_atlas::GlyphAtlas;
use crate::pixel_image::PixelImage;
use crate::utils::{Color, BLACK, WHITE};

pub const DEFAULT_BUDGET: usize = 64 * 1024;

pub struct GlyphCache {
    entries: LruCache<u32, PixelImage>,
    bytes: usize,
    budget: usize,
    fg: Color,
    bg: Color,
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

impl GlyphCache {
    pub fn new(budget: usize) -> Self {
        Self {
            entries: LruCache::unbounded(),
            bytes: 0,
            budget,
            fg: BLACK,
            bg: WHITE,
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn total_bytes(&self) -> usize {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `scalar` is cached, without touching its recency.
    pub fn contains(&self, scalar: u32) -> bool {
        self.entries.contains(&scalar)
    }

    /// Cached scalars, most recently used first.
    pub fn scalars_by_recency(&self) -> Vec<u32> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.bytes = 0;
    }

    /// Returns the bitmap for `scalar`, rasterizing it on a miss. Scalars the
    /// atlas lacks share the replacement glyph's entry.
    pub fn get(&mut self, atlas: &GlyphAtlas, scalar: u32) -> &PixelImage {
        let key = atlas.resolve(scalar);
        if !self.entries.contains(&key) {
            let glyph = atlas
                .extract_glyph(key, self.fg, self.bg)
                .unwrap_or_default();
            let size = glyph.size_in_bytes();
            self.make_room(size);
            self.bytes += size;
            self.entries.put(key, glyph);
            debug!(
                "cached glyph {:#x}, {} entries, {}/{} bytes",
                key,
                self.entries.len(),
                self.bytes,
                self.budget
            );
        }
        self.entries.get_or_insert(key, PixelImage::default)
    }

    fn make_room(&mut self, incoming: usize) {
        while self.bytes + incoming > self.budget {
            let Some((evicted, img)) = self.entries.pop_lru() else {
                break;
            };
            self.bytes -= img.size_in_bytes();
            debug!("evicted glyph {:#x}", evicted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_bytes(atlas: &GlyphAtlas, c: char) -> usize {
        atlas
            .extract_glyph(c as u32, BLACK, WHITE)
            .unwrap()
            .size_in_bytes()
    }

    #[test]
    fn hit_promotes_without_changing_total() {
        let atlas = GlyphAtlas::builtin();
        let mut cache = GlyphCache::default();
        cache.get(atlas, 'a' as u32);
        cache.get(atlas, 'b' as u32);
        let total = cache.total_bytes();
        cache.get(atlas, 'a' as u32);
        assert_eq!(cache.total_bytes(), total);
        assert_eq!(cache.scalars_by_recency(), vec!['a' as u32, 'b' as u32]);
    }

    #[test]
    fn unknown_scalars_share_replacement_entry() {
        let atlas = GlyphAtlas::builtin();
        let mut cache = GlyphCache::default();
        let q = cache.get(atlas, 0x5C0F).clone();
        cache.get(atlas, 0x7535);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains('?' as u32));
        assert_eq!(&q, cache.get(atlas, '?' as u32));
    }

    #[test]
    fn evicts_least_recent_first() {
        let atlas = GlyphAtlas::builtin();
        // 'A', 'B' and 'C' all have the same width.
        let each = glyph_bytes(atlas, 'A');
        let mut cache = GlyphCache::new(each * 2);
        cache.get(atlas, 'A' as u32);
        cache.get(atlas, 'B' as u32);
        cache.get(atlas, 'A' as u32);
        cache.get(atlas, 'C' as u32);
        assert!(cache.contains('A' as u32));
        assert!(!cache.contains('B' as u32));
        assert!(cache.contains('C' as u32));
        assert!(cache.total_bytes() <= cache.budget());
    }
}
