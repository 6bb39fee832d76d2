//! WhatsApp deep-link building

use url::form_urlencoded;

use crate::brand;

/// Parameters for a product inquiry message.
#[derive(Debug, Clone)]
pub struct Inquiry {
    pub product_name: String,
    pub option: Option<String>,
    pub price: Option<f64>,
}

/// Build a `wa.me` link carrying an inquiry for a specific product, or the
/// brand default message when no inquiry is given.
pub fn build_whatsapp_link(inquiry: Option<&Inquiry>) -> String {
    let message = match inquiry {
        Some(inquiry) => {
            let option_text = inquiry
                .option
                .as_deref()
                .map(|o| format!(" ({})", o))
                .unwrap_or_default();
            let price_text = inquiry
                .price
                .map(|p| format!(" - {}{}", brand::CURRENCY, p))
                .unwrap_or_default();
            format!(
                "Hola, me interesa el producto: {}{}{}",
                inquiry.product_name, option_text, price_text
            )
        }
        None => brand::WHATSAPP_DEFAULT_MESSAGE.to_string(),
    };

    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("text", &message)
        .finish();
    format!("https://wa.me/{}?{}", brand::WHATSAPP_NUMBER, query)
}
