//! Fixed branding values for the site.
//!
//! These are plain `&'static str` constants that page templates, metadata
//! generators and social cards import by name. The only value that depends
//! on the build environment is the site origin, see [`crate::config`].

// The description segments are defined through macros so `concat!` can
// glue them together at compile time while each segment stays exported.
macro_rules! description_en {
    () => {
        "Personal blog of Íñigo Aréjula. I write about web development,cloud, software engineering, and other topics that interest me."
    };
}

macro_rules! description_es {
    () => {
        "Blog personal de Íñigo Aréjula. Escribo sobre desarrollo web,nube, ingeniería de software y otros temas que me interesan."
    };
}

/// Display name of the site.
pub const SITE_TITLE: &str = "Íñigo Aréjula Aísa";

/// English half of [`SITE_DESCRIPTION`].
pub const DESCRIPTION_EN: &str = description_en!();

/// Spanish half of [`SITE_DESCRIPTION`].
pub const DESCRIPTION_ES: &str = description_es!();

/// Bilingual site description.
///
/// The English and Spanish segments are joined with no separator between
/// them. Consumers that need a single language should use
/// [`DESCRIPTION_EN`] or [`DESCRIPTION_ES`] instead.
pub const SITE_DESCRIPTION: &str = concat!(description_en!(), description_es!());

/// Social handle used for `twitter:site` / `twitter:creator` tags.
pub const TWITTER_HANDLE: &str = "@arejula27";

/// Author display name.
pub const MY_NAME: &str = "Íñigo Aréjula Aísa";

/// Environment variable holding the deployed site's absolute URL.
pub const SITE_URL_ENV: &str = "SITE";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_is_unseparated_concatenation() {
        assert_eq!(SITE_DESCRIPTION, format!("{DESCRIPTION_EN}{DESCRIPTION_ES}"));
        assert!(SITE_DESCRIPTION.contains("interest me.Blog personal"));
        assert_eq!(
            SITE_DESCRIPTION.len(),
            DESCRIPTION_EN.len() + DESCRIPTION_ES.len()
        );
    }

    #[test]
    fn test_description_keeps_literal_text() {
        assert!(DESCRIPTION_EN.contains("web development,cloud"));
        assert!(DESCRIPTION_ES.contains("desarrollo web,nube"));
        assert!(DESCRIPTION_EN.starts_with("Personal blog of"));
        assert!(DESCRIPTION_ES.ends_with("que me interesan."));
    }

    #[test]
    fn test_handle_format() {
        assert!(TWITTER_HANDLE.starts_with('@'));
        assert_eq!(&TWITTER_HANDLE[1..], "arejula27");
    }

    #[test]
    fn test_names_are_non_ascii() {
        assert_eq!(SITE_TITLE, MY_NAME);
        assert!(!MY_NAME.is_ascii());
        assert_eq!(MY_NAME.chars().count(), 18);
    }
}
