use crate::catalog::Product;
use crate::error::Error;
use super::escape::escape_sql;
use super::slug::slugify;

// Fixed values written into every record block. The consuming schema owns
// their meaning; they are never derived from input data.
pub const UPLOAD_PATH_PREFIX: &str = "/uploads/products";
pub const IMAGE_FILE_TYPE: &str = "image/jpeg";
pub const PLACEHOLDER_FILE_SIZE: u32 = 20480;
pub const CURRENCY: &str = "USD";
pub const IS_VISIBLE: u8 = 1;

// Render the INSERT triple for one product: media row, artworks row, and
// the artwork_images link. `position` is the record's 1-based place in the
// catalog and becomes the artwork's order_index. The link row re-selects
// ids by slug and filename because the target engine assigns ids at
// insert time when the script is replayed.
pub fn render_product_block(product: &Product, position: usize) -> Result<String, Error> {
    let slug = slugify(&product.title_en)?;

    let title_en = escape_sql(&product.title_en);
    let title_ru = escape_sql(&product.title_ru);
    let title_es = escape_sql(&product.title_es);
    let title_zh = escape_sql(&product.title_zh);
    let description_en = escape_sql(&product.description_en);
    let description_ru = escape_sql(&product.description_ru);
    let description_es = escape_sql(&product.description_es);
    let description_zh = escape_sql(&product.description_zh);
    let medium = escape_sql(&product.medium);
    let dimensions = escape_sql(&product.dimensions);
    let filename = escape_sql(&product.image_filename);

    let is_featured = if product.is_featured { 1 } else { 0 };
    let is_for_sale = if product.is_available { 1 } else { 0 };

    let raw_title = &product.title_en;
    let year = product.year;
    let price = product.price;

    Ok(format!(
        "-- Product {position}: {raw_title}
INSERT INTO media (filename, file_path, file_type, file_size, title, alt_text_en, alt_text_ru, alt_text_es, alt_text_zh, created_at)
VALUES ('{filename}', '{UPLOAD_PATH_PREFIX}/{filename}', '{IMAGE_FILE_TYPE}', {PLACEHOLDER_FILE_SIZE},
  '{title_en}', '{title_en}', '{title_ru}', '{title_es}', '{title_zh}', CURRENT_TIMESTAMP);

INSERT INTO artworks (slug, title_en, title_ru, title_es, title_zh, description_en, description_ru, description_es, description_zh,
  technique, dimensions, year, price, currency, is_featured, is_for_sale, is_visible, order_index, created_at, updated_at)
VALUES ('{slug}', '{title_en}', '{title_ru}', '{title_es}', '{title_zh}',
  '{description_en}', '{description_ru}', '{description_es}', '{description_zh}',
  '{medium}', '{dimensions}', {year}, {price}, '{CURRENCY}', {is_featured}, {is_for_sale}, {IS_VISIBLE}, {position}, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP);

INSERT INTO artwork_images (artwork_id, media_id, is_primary, order_index)
VALUES ((SELECT id FROM artworks WHERE slug = '{slug}'),
  (SELECT id FROM media WHERE filename = '{filename}'), 1, 0);

"
    ))
}
