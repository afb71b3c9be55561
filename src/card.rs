use raylib::prelude::*;
use carousel::constants::CARD_MARGIN;

/// One page of the carousel: a card image letterboxed into its page.
pub struct Card {
    image: Texture2D,
}

impl Card {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Scale that fits the card into `page`, shrinking only too big images.
    fn fit_scale(&self, page: Rectangle) -> f32 {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let max_width = page.width * CARD_MARGIN;
        let max_height = page.height * CARD_MARGIN;
        (max_width / tex_width).min(max_height / tex_height).min(1.0)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, page: Rectangle) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return;
        }

        let scale = self.fit_scale(page);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            page.x + (page.width - scaled_width) * 0.5,
            page.y + (page.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
