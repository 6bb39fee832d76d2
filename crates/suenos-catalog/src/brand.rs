//! Brand constants
//!
//! Single source of truth for store-wide tokens: name, WhatsApp contact,
//! fixed texts, category identifiers, banner assets.

pub const NAME: &str = "LOS MEJORES SUEÑOS";
pub const TAGLINE: &str = "Colchones y almohadas para un descanso perfecto";

pub const LOGO: &str = "/images/logos/logo-mejores-suenos.png";

/// WhatsApp contact used for product inquiries.
pub const WHATSAPP_NUMBER: &str = "593978906210";
pub const WHATSAPP_DEFAULT_MESSAGE: &str =
    "Hola, me interesa un producto de Los Mejores Sueños";

pub const SHIPPING_INCLUDED: &str = "El precio incluye envío a nivel nacional.";
pub const CURRENCY: &str = "$";

/// Category identifiers, the foreign-key targets of `Product::category_id`.
pub mod categories {
    pub const COLCHONES: &str = "colchones";
    pub const ALMOHADAS: &str = "almohadas";
}

/// Banner images keyed by category.
pub mod banners {
    pub const COLCHONES: &str = "/images/logos/banner-colchones.png";
    pub const ALMOHADAS: &str = "/images/logos/banner-almohadas.png";
}
