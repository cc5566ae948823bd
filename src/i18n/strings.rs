/// All localized interface strings for a locale
///
/// Strings are stored raw and HTML-escaped at render time.
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Branding ====================
    /// Site name shown in the header and footer
    pub site_name: &'static str,

    // ==================== Navigation ====================
    pub nav_academy: &'static str,
    pub nav_admissions: &'static str,
    pub nav_education: &'static str,
    pub nav_sport: &'static str,
    pub nav_science: &'static str,
    pub nav_students: &'static str,
    pub nav_news: &'static str,
    pub nav_announcements: &'static str,
    pub nav_contacts: &'static str,

    /// Heading for the navbar document (PDF) links
    pub nav_documents: &'static str,

    // ==================== Content States ====================
    /// Shown in a section whose content request failed
    pub load_failed: &'static str,

    /// Label of the retry link in a failed section
    pub retry: &'static str,

    /// Shown when a list endpoint returned no items
    pub empty_list: &'static str,

    /// Link label for an item's detail page
    pub read_more: &'static str,

    /// Link label for a downloadable document
    pub download: &'static str,

    // ==================== Footer ====================
    /// Placeholders: {year}, {site}
    pub footer_rights: &'static str,

    pub privacy: &'static str,
    pub terms: &'static str,
}

impl LocaleStrings {
    /// Footer copyright line with placeholders filled in
    pub fn footer_line(&self, year: i32) -> String {
        self.footer_rights
            .replace("{year}", &year.to_string())
            .replace("{site}", self.site_name)
    }
}

// ==================== Russian Strings ====================

/// Russian interface strings (primary)
pub const RUSSIAN_STRINGS: LocaleStrings = LocaleStrings {
    site_name: "Спортивная академия",

    nav_academy: "Академия",
    nav_admissions: "Поступающим",
    nav_education: "Образование",
    nav_sport: "Спорт",
    nav_science: "Наука",
    nav_students: "Студентам",
    nav_news: "Новости",
    nav_announcements: "Объявления",
    nav_contacts: "Контакты",
    nav_documents: "Документы",

    load_failed: "Не удалось загрузить данные.",
    retry: "Повторить",
    empty_list: "Пока здесь ничего нет.",
    read_more: "Подробнее",
    download: "Скачать",

    footer_rights: "© {year} {site}. Все права защищены.",
    privacy: "Политика конфиденциальности",
    terms: "Условия использования",
};

// ==================== Kyrgyz Strings ====================

/// Kyrgyz interface strings
pub const KYRGYZ_STRINGS: LocaleStrings = LocaleStrings {
    site_name: "Спорт академиясы",

    nav_academy: "Академия",
    nav_admissions: "Абитуриенттерге",
    nav_education: "Билим берүү",
    nav_sport: "Спорт",
    nav_science: "Илим",
    nav_students: "Студенттерге",
    nav_news: "Жаңылыктар",
    nav_announcements: "Кулактандыруулар",
    nav_contacts: "Байланыш",
    nav_documents: "Документтер",

    load_failed: "Маалыматтарды жүктөө мүмкүн болгон жок.",
    retry: "Кайталоо",
    empty_list: "Азырынча бул жерде эч нерсе жок.",
    read_more: "Толугураак",
    download: "Жүктөп алуу",

    footer_rights: "© {year} {site}. Бардык укуктар корголгон.",
    privacy: "Купуялык саясаты",
    terms: "Колдонуу шарттары",
};

// ==================== English Strings ====================

/// English interface strings
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    site_name: "Sports Academy",

    nav_academy: "Academy",
    nav_admissions: "Admissions",
    nav_education: "Education",
    nav_sport: "Sport",
    nav_science: "Science",
    nav_students: "Students",
    nav_news: "News",
    nav_announcements: "Announcements",
    nav_contacts: "Contacts",
    nav_documents: "Documents",

    load_failed: "Failed to load data.",
    retry: "Retry",
    empty_list: "Nothing here yet.",
    read_more: "Read more",
    download: "Download",

    footer_rights: "© {year} {site}. All rights reserved.",
    privacy: "Privacy Policy",
    terms: "Terms of Use",
};
