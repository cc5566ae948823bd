//! Built-in localized SEO metadata for every page of the site.
//!
//! Each entry is `(title, description, keywords)`.

pub(super) type Entry = (&'static str, &'static str, &'static str);

pub(super) struct BuiltinPage {
    pub key: &'static str,
    pub ru: Entry,
    pub kg: Entry,
    pub en: Entry,
}

pub(super) const BUILTIN_PAGES: &[BuiltinPage] = &[
    BuiltinPage {
        key: "home",
        ru: (
            "Спортивная академия | Главная",
            "Спортивная академия: высшее образование в области физической культуры и спорта, подготовка тренеров и спортсменов.",
            "спортивная академия, физическая культура, спорт, высшее образование, Кыргызстан",
        ),
        kg: (
            "Спорт академиясы | Башкы бет",
            "Спорт академиясы: дене тарбия жана спорт тармагында жогорку билим, машыктыруучуларды жана спортчуларды даярдоо.",
            "спорт академиясы, дене тарбия, спорт, жогорку билим, Кыргызстан",
        ),
        en: (
            "Sports Academy | Home",
            "Sports Academy: higher education in physical culture and sport, training coaches and athletes.",
            "sports academy, physical education, sport, higher education, Kyrgyzstan",
        ),
    },
    BuiltinPage {
        key: "privacy",
        ru: (
            "Политика конфиденциальности",
            "Как Спортивная академия собирает, использует и защищает персональные данные посетителей сайта.",
            "политика конфиденциальности, персональные данные",
        ),
        kg: (
            "Купуялык саясаты",
            "Спорт академиясы сайттын колдонуучуларынын жеке маалыматтарын кантип чогултат, колдонот жана коргойт.",
            "купуялык саясаты, жеке маалыматтар",
        ),
        en: (
            "Privacy Policy",
            "How the Sports Academy collects, uses and protects personal data of site visitors.",
            "privacy policy, personal data",
        ),
    },
    BuiltinPage {
        key: "terms",
        ru: (
            "Условия использования",
            "Правила использования материалов и сервисов сайта Спортивной академии.",
            "условия использования, правила сайта",
        ),
        kg: (
            "Колдонуу шарттары",
            "Спорт академиясынын сайтынын материалдарын жана кызматтарын колдонуу эрежелери.",
            "колдонуу шарттары, сайттын эрежелери",
        ),
        en: (
            "Terms of Use",
            "Rules for using the materials and services of the Sports Academy website.",
            "terms of use, site rules",
        ),
    },
    BuiltinPage {
        key: "contacts",
        ru: (
            "Контакты",
            "Адрес, телефоны и электронная почта Спортивной академии, схема проезда.",
            "контакты, адрес, телефон, приемная комиссия",
        ),
        kg: (
            "Байланыш",
            "Спорт академиясынын дареги, телефондору жана электрондук почтасы, жол көрсөткүч.",
            "байланыш, дарек, телефон, кабыл алуу комиссиясы",
        ),
        en: (
            "Contacts",
            "Address, phone numbers and email of the Sports Academy, directions.",
            "contacts, address, phone, admissions office",
        ),
    },
    BuiltinPage {
        key: "news",
        ru: (
            "Новости",
            "Последние новости Спортивной академии: соревнования, события и достижения.",
            "новости, события, соревнования",
        ),
        kg: (
            "Жаңылыктар",
            "Спорт академиясынын акыркы жаңылыктары: мелдештер, иш-чаралар жана жетишкендиктер.",
            "жаңылыктар, иш-чаралар, мелдештер",
        ),
        en: (
            "News",
            "Latest news of the Sports Academy: competitions, events and achievements.",
            "news, events, competitions",
        ),
    },
    BuiltinPage {
        key: "news_detail",
        ru: (
            "Новость",
            "Подробности новости Спортивной академии.",
            "новости академии",
        ),
        kg: (
            "Жаңылык",
            "Спорт академиясынын жаңылыгынын толук маалыматы.",
            "академиянын жаңылыктары",
        ),
        en: (
            "News Article",
            "Full story from the Sports Academy news.",
            "academy news",
        ),
    },
    BuiltinPage {
        key: "announcements",
        ru: (
            "Объявления",
            "Актуальные объявления для студентов, абитуриентов и сотрудников академии.",
            "объявления, студентам, абитуриентам",
        ),
        kg: (
            "Кулактандыруулар",
            "Академиянын студенттери, абитуриенттери жана кызматкерлери үчүн актуалдуу кулактандыруулар.",
            "кулактандыруулар, студенттерге, абитуриенттерге",
        ),
        en: (
            "Announcements",
            "Current announcements for students, applicants and staff of the academy.",
            "announcements, students, applicants",
        ),
    },
    BuiltinPage {
        key: "announcement_detail",
        ru: (
            "Объявление",
            "Полный текст объявления Спортивной академии.",
            "объявление академии",
        ),
        kg: (
            "Кулактандыруу",
            "Спорт академиясынын кулактандыруусунун толук тексти.",
            "академиянын кулактандыруусу",
        ),
        en: (
            "Announcement",
            "Full text of a Sports Academy announcement.",
            "academy announcement",
        ),
    },
    BuiltinPage {
        key: "academy_about",
        ru: (
            "Об академии",
            "Миссия, ценности и направления работы Спортивной академии.",
            "об академии, миссия, история, спортивное образование",
        ),
        kg: (
            "Академия жөнүндө",
            "Спорт академиясынын миссиясы, баалуулуктары жана иш багыттары.",
            "академия жөнүндө, миссия, тарых, спорттук билим",
        ),
        en: (
            "About Academy",
            "Mission, values and areas of work of the Sports Academy.",
            "about academy, mission, history, sports education",
        ),
    },
    BuiltinPage {
        key: "academy_history",
        ru: (
            "История академии",
            "Путь Спортивной академии от основания до наших дней.",
            "история академии, основание, выпускники",
        ),
        kg: (
            "Академиянын тарыхы",
            "Спорт академиясынын негизделгенден бүгүнкү күнгө чейинки жолу.",
            "академиянын тарыхы, негизделиши, бүтүрүүчүлөр",
        ),
        en: (
            "Academy History",
            "The Sports Academy's path from its founding to the present day.",
            "academy history, founding, alumni",
        ),
    },
    BuiltinPage {
        key: "academy_leadership",
        ru: (
            "Руководство",
            "Ректорат и руководство Спортивной академии.",
            "руководство, ректор, проректоры",
        ),
        kg: (
            "Жетекчилик",
            "Спорт академиясынын ректораты жана жетекчилиги.",
            "жетекчилик, ректор, проректорлор",
        ),
        en: (
            "Leadership",
            "Rector's office and leadership of the Sports Academy.",
            "leadership, rector, vice-rectors",
        ),
    },
    BuiltinPage {
        key: "academy_structure",
        ru: (
            "Структура академии",
            "Факультеты, кафедры и подразделения Спортивной академии.",
            "структура, факультеты, подразделения",
        ),
        kg: (
            "Академиянын түзүмү",
            "Спорт академиясынын факультеттери, кафедралары жана бөлүмдөрү.",
            "түзүм, факультеттер, бөлүмдөр",
        ),
        en: (
            "Academy Structure",
            "Faculties, departments and units of the Sports Academy.",
            "structure, faculties, units",
        ),
    },
    BuiltinPage {
        key: "academy_documents",
        ru: (
            "Документы",
            "Устав, лицензии, положения и другие официальные документы академии.",
            "документы, устав, лицензия, положения",
        ),
        kg: (
            "Документтер",
            "Академиянын уставы, лицензиялары, жоболору жана башка расмий документтери.",
            "документтер, устав, лицензия, жоболор",
        ),
        en: (
            "Documents",
            "Charter, licenses, regulations and other official documents of the academy.",
            "documents, charter, license, regulations",
        ),
    },
    BuiltinPage {
        key: "admissions_bachelor",
        ru: (
            "Бакалавриат",
            "Поступление на программы бакалавриата: сроки, документы и вступительные испытания.",
            "поступление, бакалавриат, абитуриенту",
        ),
        kg: (
            "Бакалавриат",
            "Бакалавриат программаларына тапшыруу: мөөнөттөр, документтер жана кирүү сынактары.",
            "тапшыруу, бакалавриат, абитуриентке",
        ),
        en: (
            "Bachelor's Admission",
            "Applying to bachelor's programs: deadlines, documents and entrance tests.",
            "admission, bachelor, applicants",
        ),
    },
    BuiltinPage {
        key: "admissions_master",
        ru: (
            "Магистратура",
            "Поступление в магистратуру Спортивной академии: направления и требования.",
            "поступление, магистратура",
        ),
        kg: (
            "Магистратура",
            "Спорт академиясынын магистратурасына тапшыруу: багыттар жана талаптар.",
            "тапшыруу, магистратура",
        ),
        en: (
            "Master's Admission",
            "Applying to master's programs at the Sports Academy: tracks and requirements.",
            "admission, master's degree",
        ),
    },
    BuiltinPage {
        key: "admissions_rules",
        ru: (
            "Правила приема",
            "Правила приема в Спортивную академию на текущий учебный год.",
            "правила приема, приемная комиссия",
        ),
        kg: (
            "Кабыл алуу эрежелери",
            "Учурдагы окуу жылына Спорт академиясына кабыл алуу эрежелери.",
            "кабыл алуу эрежелери, кабыл алуу комиссиясы",
        ),
        en: (
            "Admission Rules",
            "Rules of admission to the Sports Academy for the current academic year.",
            "admission rules, admissions office",
        ),
    },
    BuiltinPage {
        key: "education_programs",
        ru: (
            "Образовательные программы",
            "Направления подготовки и образовательные программы Спортивной академии.",
            "образовательные программы, направления подготовки",
        ),
        kg: (
            "Билим берүү программалары",
            "Спорт академиясынын даярдоо багыттары жана билим берүү программалары.",
            "билим берүү программалары, даярдоо багыттары",
        ),
        en: (
            "Educational Programs",
            "Fields of study and educational programs of the Sports Academy.",
            "educational programs, fields of study",
        ),
    },
    BuiltinPage {
        key: "education_departments",
        ru: (
            "Кафедры",
            "Кафедры академии и их преподавательский состав.",
            "кафедры, преподаватели",
        ),
        kg: (
            "Кафедралар",
            "Академиянын кафедралары жана алардын окутуучулары.",
            "кафедралар, окутуучулар",
        ),
        en: (
            "Departments",
            "Academic departments and their teaching staff.",
            "departments, teaching staff",
        ),
    },
    BuiltinPage {
        key: "education_schedule",
        ru: (
            "Расписание занятий",
            "Расписание учебных занятий и экзаменационных сессий.",
            "расписание, занятия, сессия",
        ),
        kg: (
            "Сабактардын жадыбалы",
            "Окуу сабактарынын жана экзамен сессияларынын жадыбалы.",
            "жадыбал, сабактар, сессия",
        ),
        en: (
            "Class Schedule",
            "Schedule of classes and examination sessions.",
            "schedule, classes, exams",
        ),
    },
    BuiltinPage {
        key: "sport_teams",
        ru: (
            "Сборные команды",
            "Сборные команды академии по видам спорта и их тренеры.",
            "сборные команды, тренеры, виды спорта",
        ),
        kg: (
            "Курама командалар",
            "Академиянын спорт түрлөрү боюнча курама командалары жана алардын машыктыруучулары.",
            "курама командалар, машыктыруучулар, спорт түрлөрү",
        ),
        en: (
            "Teams",
            "Academy teams by sport and their coaches.",
            "teams, coaches, sports",
        ),
    },
    BuiltinPage {
        key: "sport_achievements",
        ru: (
            "Спортивные достижения",
            "Победы и рекорды студентов и выпускников академии.",
            "достижения, победы, медали, чемпионы",
        ),
        kg: (
            "Спорттук жетишкендиктер",
            "Академиянын студенттеринин жана бүтүрүүчүлөрүнүн жеңиштери жана рекорддору.",
            "жетишкендиктер, жеңиштер, медалдар, чемпиондор",
        ),
        en: (
            "Sports Achievements",
            "Victories and records of academy students and alumni.",
            "achievements, victories, medals, champions",
        ),
    },
    BuiltinPage {
        key: "sport_facilities",
        ru: (
            "Спортивная база",
            "Стадион, залы и бассейн Спортивной академии.",
            "спортивная база, стадион, спортзал, бассейн",
        ),
        kg: (
            "Спорт базасы",
            "Спорт академиясынын стадиону, залдары жана бассейни.",
            "спорт базасы, стадион, спорт зал, бассейн",
        ),
        en: (
            "Sports Facilities",
            "Stadium, gyms and swimming pool of the Sports Academy.",
            "sports facilities, stadium, gym, swimming pool",
        ),
    },
    BuiltinPage {
        key: "science_research",
        ru: (
            "Научные исследования",
            "Научные направления и исследовательские проекты академии.",
            "наука, исследования, спортивная наука",
        ),
        kg: (
            "Илимий изилдөөлөр",
            "Академиянын илимий багыттары жана изилдөө долбоорлору.",
            "илим, изилдөөлөр, спорттук илим",
        ),
        en: (
            "Research",
            "Research areas and projects of the academy.",
            "science, research, sports science",
        ),
    },
    BuiltinPage {
        key: "science_conferences",
        ru: (
            "Конференции",
            "Научные конференции и семинары, проводимые академией.",
            "конференции, семинары, наука",
        ),
        kg: (
            "Конференциялар",
            "Академия өткөргөн илимий конференциялар жана семинарлар.",
            "конференциялар, семинарлар, илим",
        ),
        en: (
            "Conferences",
            "Scientific conferences and seminars held by the academy.",
            "conferences, seminars, science",
        ),
    },
    BuiltinPage {
        key: "students_life",
        ru: (
            "Студенческая жизнь",
            "Клубы, мероприятия и студенческое самоуправление академии.",
            "студенческая жизнь, клубы, мероприятия",
        ),
        kg: (
            "Студенттик турмуш",
            "Академиянын клубдары, иш-чаралары жана студенттик өз алдынча башкаруусу.",
            "студенттик турмуш, клубдар, иш-чаралар",
        ),
        en: (
            "Student Life",
            "Clubs, events and student government at the academy.",
            "student life, clubs, events",
        ),
    },
    BuiltinPage {
        key: "students_dormitory",
        ru: (
            "Общежитие",
            "Условия проживания и порядок заселения в общежитие академии.",
            "общежитие, проживание, заселение",
        ),
        kg: (
            "Жатакана",
            "Академиянын жатаканасында жашоо шарттары жана жайгашуу тартиби.",
            "жатакана, жашоо, жайгашуу",
        ),
        en: (
            "Dormitory",
            "Living conditions and check-in procedure for the academy dormitory.",
            "dormitory, accommodation, check-in",
        ),
    },
];
