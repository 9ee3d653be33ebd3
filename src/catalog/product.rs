use serde::Deserialize;

// One catalog entry. English is the primary language variant and drives
// slug derivation; the others are carried through as literals.
#[derive(Debug, Deserialize, PartialEq)]
pub struct Product {
    pub title_en: String,
    pub title_ru: String,
    pub title_es: String,
    pub title_zh: String,
    pub description_en: String,
    pub description_ru: String,
    pub description_es: String,
    pub description_zh: String,
    pub medium: String,
    pub dimensions: String,
    pub image_filename: String,
    pub year: i32,
    pub price: f64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_parsing() {
        let product_str = r#"
            title_en: "Sunset Over Bay"
            title_ru: "Закат над заливом"
            title_es: "Atardecer sobre la bahía"
            title_zh: "海湾日落"
            description_en: "Oil painting of a sunset over the bay."
            description_ru: "Картина маслом: закат над заливом."
            description_es: "Pintura al óleo de un atardecer sobre la bahía."
            description_zh: "海湾日落油画。"
            medium: "Oil on canvas"
            dimensions: "60 x 80 cm"
            image_filename: "sunset-over-bay.jpg"
            year: 2021
            price: 450
            is_featured: true
            is_available: false
        "#;

        let product: Product = serde_yaml::from_str(product_str).unwrap();
        assert_eq!(product.title_en, "Sunset Over Bay");
        assert_eq!(product.title_zh, "海湾日落");
        assert_eq!(product.year, 2021);
        assert_eq!(product.price, 450.0);
        assert!(product.is_featured);
        assert!(!product.is_available);
    }

    #[test]
    fn test_flag_defaults() {
        let product_str = r#"
            title_en: "The Bull"
            title_ru: "Бык"
            title_es: "El toro"
            title_zh: "公牛"
            description_en: "d"
            description_ru: "d"
            description_es: "d"
            description_zh: "d"
            medium: "Bronze"
            dimensions: "30 x 20 x 15 cm"
            image_filename: "the-bull.jpg"
            year: 2019
            price: 2400
        "#;

        let product: Product = serde_yaml::from_str(product_str).unwrap();
        assert!(!product.is_featured);
        assert!(product.is_available);
    }
}
