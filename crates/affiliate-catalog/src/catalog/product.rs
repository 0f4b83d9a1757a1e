//! Product and draft types.
//!
//! Field names on the wire follow the backend's schema (`titulo_exibicao`,
//! `em_destaque`, ...). Every field except `id` is required when decoding.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The editable part of a product: everything except the server-assigned id.
///
/// Used as the request body for both create and update (update is a full
/// replace of these fields).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductDraft {
    /// Title shown on cards and in the hero.
    #[serde(rename = "titulo_exibicao")]
    pub display_title: String,
    /// One-paragraph description shown in the detail view.
    #[serde(rename = "descricao_curta")]
    pub short_description: String,
    /// Product image URL.
    #[serde(rename = "url_imagem")]
    pub image_url: String,
    /// Outbound affiliate URL.
    #[serde(rename = "link_afiliado_final")]
    pub affiliate_link: String,
    /// Catalog-unique slug. Uniqueness is enforced by the backend.
    #[serde(rename = "slug_personalizado")]
    pub custom_slug: String,
    /// Pre-formatted price label (e.g. "R$ 199,90"). Never parsed.
    #[serde(rename = "preco_exibicao")]
    pub display_price: String,
    /// Marketplace label (e.g. "Amazon").
    #[serde(rename = "plataforma")]
    pub platform: String,
    /// Free-text category label.
    #[serde(rename = "categoria")]
    pub category: String,
    /// Whether the product is promoted to the storefront hero.
    #[serde(rename = "em_destaque")]
    pub featured: bool,
}

impl ProductDraft {
    /// Create a draft with a title and every other field empty.
    pub fn new(display_title: impl Into<String>) -> Self {
        Self {
            display_title: display_title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = description.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_affiliate_link(mut self, link: impl Into<String>) -> Self {
        self.affiliate_link = link.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.custom_slug = slug.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.display_price = price.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }
}

/// A product in the catalog.
///
/// `id` is `None` only for values that have not been saved yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(rename = "titulo_exibicao")]
    pub display_title: String,
    #[serde(rename = "descricao_curta")]
    pub short_description: String,
    #[serde(rename = "url_imagem")]
    pub image_url: String,
    #[serde(rename = "link_afiliado_final")]
    pub affiliate_link: String,
    #[serde(rename = "slug_personalizado")]
    pub custom_slug: String,
    #[serde(rename = "preco_exibicao")]
    pub display_price: String,
    #[serde(rename = "plataforma")]
    pub platform: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "em_destaque")]
    pub featured: bool,
}

impl Product {
    /// Attach an identifier to a draft.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self::from_parts(Some(id), draft)
    }

    /// A product that has not been saved yet.
    pub fn unsaved(draft: ProductDraft) -> Self {
        Self::from_parts(None, draft)
    }

    fn from_parts(id: Option<ProductId>, draft: ProductDraft) -> Self {
        let ProductDraft {
            display_title,
            short_description,
            image_url,
            affiliate_link,
            custom_slug,
            display_price,
            platform,
            category,
            featured,
        } = draft;

        Self {
            id,
            display_title,
            short_description,
            image_url,
            affiliate_link,
            custom_slug,
            display_price,
            platform,
            category,
            featured,
        }
    }

    /// Copy the editable fields out, dropping the id.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            display_title: self.display_title.clone(),
            short_description: self.short_description.clone(),
            image_url: self.image_url.clone(),
            affiliate_link: self.affiliate_link.clone(),
            custom_slug: self.custom_slug.clone(),
            display_price: self.display_price.clone(),
            platform: self.platform.clone(),
            category: self.category.clone(),
            featured: self.featured,
        }
    }

    /// Check if the product has been persisted.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Case-insensitive substring match against the display title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.display_title
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> ProductDraft {
        ProductDraft::new("Fone Bluetooth")
            .with_description("Cancelamento de ruído")
            .with_image_url("https://img.example/fone.jpg")
            .with_affiliate_link("https://amzn.to/abc")
            .with_slug("fone-bluetooth")
            .with_price("R$ 199,90")
            .with_platform("Amazon")
            .with_category("Áudio")
            .with_featured(true)
    }

    #[test]
    fn test_product_uses_backend_field_names() {
        let product = Product::new(ProductId::new(3), sample_draft());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["titulo_exibicao"], "Fone Bluetooth");
        assert_eq!(json["slug_personalizado"], "fone-bluetooth");
        assert_eq!(json["preco_exibicao"], "R$ 199,90");
        assert_eq!(json["em_destaque"], true);
    }

    #[test]
    fn test_draft_has_no_id() {
        let json = serde_json::to_value(sample_draft()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["categoria"], "Áudio");
    }

    #[test]
    fn test_decode_without_id() {
        let mut json = serde_json::to_value(sample_draft()).unwrap();
        json["id"] = serde_json::Value::Null;
        let product: Product = serde_json::from_value(json).unwrap();
        assert!(!product.is_saved());
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let json = serde_json::json!({
            "id": 1,
            "titulo_exibicao": "Sem categoria",
            "descricao_curta": "",
            "url_imagem": "",
            "link_afiliado_final": "",
            "slug_personalizado": "sem-categoria",
            "preco_exibicao": "",
            "plataforma": "",
            "em_destaque": false
        });
        assert!(serde_json::from_value::<Product>(json).is_err());
    }

    #[test]
    fn test_draft_roundtrip_through_product() {
        let draft = sample_draft();
        let product = Product::new(ProductId::new(9), draft.clone());
        assert_eq!(product.to_draft(), draft);
        assert_eq!(product.id, Some(ProductId::new(9)));
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let product = Product::unsaved(ProductDraft::new("Wireless Mouse"));
        assert!(product.title_contains("mouse"));
        assert!(product.title_contains("WIRE"));
        assert!(product.title_contains(""));
        assert!(!product.title_contains("keyboard"));
    }
}
