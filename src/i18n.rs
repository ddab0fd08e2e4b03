use dioxus_i18n::prelude::*;

/// Initialize i18n configuration with Brazilian Portuguese as default language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("pt-BR"))
        .with_locale(Locale::new_static(
            unic_langid::langid!("pt-BR"),
            include_str!("../locales/pt-BR.ftl"),
        ))
        .with_locale(Locale::new_static(
            unic_langid::langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
}
