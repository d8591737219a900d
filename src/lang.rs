//! Language variants for the showcase.
//!
//! The site ships in Spanish and English. Everything user-visible resolves
//! through this table so both variants share one copy of the page logic.

use std::fmt;

/// Supported site languages. Spanish is the primary variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// Parses a CLI language code ("es" / "en").
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other variant (used by the header switcher).
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    /// Short uppercase tag shown on the switcher buttons.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// All user-visible strings for one language variant.
pub struct Strings {
    pub tagline: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,

    pub nav_links: [&'static str; 5],

    pub services_heading: &'static str,
    pub products_heading: &'static str,
    pub testimonials_heading: &'static str,
    pub contact_heading: &'static str,

    pub filter_all: &'static str,

    /// Service cards: title and description.
    pub services: [(&'static str, &'static str); 4],
    /// Testimonial cards: quote and author.
    pub testimonials: [(&'static str, &'static str); 3],
    /// Contact detail items: label and value.
    pub contact_items: [(&'static str, &'static str); 3],

    pub label_name: &'static str,
    pub label_email: &'static str,
    pub label_phone: &'static str,
    pub label_event_type: &'static str,
    pub label_message: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,

    pub event_types: [&'static str; 5],

    pub err_name: &'static str,
    pub err_email: &'static str,
    pub err_phone: &'static str,
    pub err_event_type: &'static str,
    pub err_message_short: &'static str,
    pub err_message_long: &'static str,
    pub err_required: &'static str,

    pub form_success: &'static str,
    pub form_error: &'static str,
    pub token_error: &'static str,

    pub modal_features: &'static str,
    pub empty_category_title: &'static str,
    pub empty_category_hint: &'static str,

    pub copied_contact: &'static str,
    pub clipboard_unavailable: &'static str,
}

const ES: Strings = Strings {
    tagline: "Alquiler de mobiliario y decoración para eventos",
    hero_title: "Hacemos de tu evento algo inolvidable",
    hero_subtitle: "Vajilla, cristalería, mobiliario y decoración para bodas, celebraciones y eventos corporativos.",
    hero_cta: "Solicita tu cotización",

    nav_links: ["Inicio", "Servicios", "Productos", "Testimonios", "Contacto"],

    services_heading: "Nuestros Servicios",
    products_heading: "Nuestros Productos",
    testimonials_heading: "Lo que dicen nuestros clientes",
    contact_heading: "Contáctanos",

    filter_all: "Todos",

    services: [
        (
            "Alquiler de Mobiliario",
            "Mesas, sillas y salas lounge para cualquier aforo",
        ),
        (
            "Vajilla y Cristalería",
            "Servicio completo para banquetes y galas",
        ),
        (
            "Decoración y Ambientación",
            "Montaje temático adaptado a tu celebración",
        ),
        (
            "Asesoría de Eventos",
            "Te acompañamos del diseño al desmontaje",
        ),
    ],
    testimonials: [
        (
            "Todo impecable y a tiempo. La decoración superó lo que imaginamos.",
            "María Fernández",
        ),
        (
            "El mobiliario llegó montado y en perfecto estado. Repetiremos.",
            "Carlos Ortega",
        ),
        (
            "Atención cercana y profesional de principio a fin.",
            "Lucía Ramírez",
        ),
    ],
    contact_items: [
        ("Email", "hola@eventrent.example"),
        ("Teléfono", "+34 612 345 678"),
        ("Dirección", "Calle del Evento 12, Madrid"),
    ],

    label_name: "Nombre",
    label_email: "Correo electrónico",
    label_phone: "Teléfono",
    label_event_type: "Tipo de evento",
    label_message: "Mensaje",
    submit: "Enviar consulta",
    submitting: "Enviando...",

    event_types: ["Boda", "Cumpleaños", "Corporativo", "Aniversario", "Otro"],

    err_name: "El nombre debe tener entre 2 y 50 caracteres (solo letras y espacios)",
    err_email: "Ingresa un correo electrónico válido",
    err_phone: "Ingresa un teléfono válido (9 a 20 caracteres)",
    err_event_type: "Selecciona un tipo de evento",
    err_message_short: "El mensaje debe tener al menos 10 caracteres",
    err_message_long: "El mensaje no puede superar los 500 caracteres",
    err_required: "Este campo es obligatorio",

    form_success: "¡Gracias por tu consulta! Te contactaremos pronto.",
    form_error: "Por favor, completa todos los campos correctamente.",
    token_error: "Token de seguridad inválido. Recarga la página.",

    modal_features: "Características",
    empty_category_title: "No hay productos en esta categoría",
    empty_category_hint: "Pulsa 'f' para cambiar de categoría",

    copied_contact: "Datos de contacto copiados al portapapeles",
    clipboard_unavailable: "Portapapeles no disponible",
};

const EN: Strings = Strings {
    tagline: "Furniture and decor rental for events",
    hero_title: "We make your event unforgettable",
    hero_subtitle: "Tableware, glassware, furniture and decor for weddings, celebrations and corporate events.",
    hero_cta: "Request a quote",

    nav_links: ["Home", "Services", "Products", "Testimonials", "Contact"],

    services_heading: "Our Services",
    products_heading: "Our Products",
    testimonials_heading: "What our clients say",
    contact_heading: "Contact Us",

    filter_all: "All",

    services: [
        (
            "Furniture Rental",
            "Tables, chairs and lounge sets for any headcount",
        ),
        (
            "Tableware & Glassware",
            "Full service for banquets and galas",
        ),
        (
            "Decor & Styling",
            "Themed setups tailored to your celebration",
        ),
        (
            "Event Consulting",
            "With you from design to teardown",
        ),
    ],
    testimonials: [
        (
            "Flawless and on time. The decor went beyond what we imagined.",
            "María Fernández",
        ),
        (
            "The furniture arrived assembled and in perfect shape. We'll be back.",
            "Carlos Ortega",
        ),
        (
            "Warm, professional service from start to finish.",
            "Lucía Ramírez",
        ),
    ],
    contact_items: [
        ("Email", "hola@eventrent.example"),
        ("Phone", "+34 612 345 678"),
        ("Address", "Calle del Evento 12, Madrid"),
    ],

    label_name: "Name",
    label_email: "Email",
    label_phone: "Phone",
    label_event_type: "Event type",
    label_message: "Message",
    submit: "Send inquiry",
    submitting: "Sending...",

    event_types: ["Wedding", "Birthday", "Corporate", "Anniversary", "Other"],

    err_name: "Name must be 2 to 50 characters (letters and spaces only)",
    err_email: "Enter a valid email address",
    err_phone: "Enter a valid phone number (9 to 20 characters)",
    err_event_type: "Select an event type",
    err_message_short: "Message must be at least 10 characters",
    err_message_long: "Message cannot exceed 500 characters",
    err_required: "This field is required",

    form_success: "Thank you for your inquiry! We will contact you soon.",
    form_error: "Please fill in all fields correctly.",
    token_error: "Token de seguridad inválido. Recarga la página.",

    modal_features: "Features",
    empty_category_title: "No products in this category",
    empty_category_hint: "Press 'f' to change category",

    copied_contact: "Contact details copied to clipboard",
    clipboard_unavailable: "Clipboard not available",
};

/// Returns the string table for a language.
pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Es => &ES,
        Language::En => &EN,
    }
}
