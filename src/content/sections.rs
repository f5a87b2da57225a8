//! Fixed page sections that are not part of the JSON documents.

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Які терміни виконання робіт?",
        answer: "Терміни виконання робіт залежать від складності завдання, але ми завжди намагаємося завершити роботу якнайшвидше.",
    },
    FaqEntry {
        question: "Чи надаєте ви гарантію на виконані роботи?",
        answer: "Так, ми надаємо гарантію на роботи від 3 до 10 років залежно від виду робіт.",
    },
    FaqEntry {
        question: "Чи можна викликати електрика в нічний час?",
        answer: "Так, ми працюємо цілодобово. Аварійний виклик доступний 24/7.",
    },
    FaqEntry {
        question: "Яка вартість прорахунку електромонтажних робіт?",
        answer: "Прорахунок вартості робіт проводиться безкоштовно після огляду об'єкта.",
    },
    FaqEntry {
        question: "Які матеріали ви використовуєте у роботі?",
        answer: "Ми використовуємо тільки сертифіковані матеріали від провідних виробників, що відповідають стандартам ДСТУ.",
    },
    FaqEntry {
        question: "Як швидко ви можете приїхати на аварійний виклик?",
        answer: "На аварійний виклик ми приїжджаємо протягом 30 хвилин у межах Кам'янця-Подільського.",
    },
    FaqEntry {
        question: "Чи є знижки для постійних клієнтів?",
        answer: "Так, для постійних клієнтів ми надаємо знижки та спеціальні умови співпраці.",
    },
    FaqEntry {
        question: "Як оплатити ваші послуги?",
        answer: "Оплата можлива готівкою, картою або шляхом оплати на рахунок. Оплата після виконання робіт.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct GalleryItem {
    pub src: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub location: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        src: "/static/images/gallery/wiring-work.jpeg",
        title: "Заміна електропроводки",
        category: "wiring",
        description: "Повна заміна проводки в 2-кімнатній квартирі з встановленням сучасного електрощита",
        location: "вул. Соборна",
    },
    GalleryItem {
        src: "/static/images/gallery/panel-installation.jpg",
        title: "Монтаж електрощита",
        category: "panels",
        description: "Встановлення нового електрощита з автоматичними вимикачами та УЗО",
        location: "вул. Хмельницька",
    },
    GalleryItem {
        src: "/static/images/gallery/outlet-installation.jpg",
        title: "Встановлення розеток",
        category: "outlets",
        description: "Монтаж додаткових розеток та вимикачів в офісному приміщенні",
        location: "вул. Грушевського",
    },
    GalleryItem {
        src: "/static/images/gallery/lighting-installation.jpg",
        title: "Монтаж освітлення",
        category: "lighting",
        description: "Встановлення сучасних світлодіодних світильників та диммерів",
        location: "вул. Пушкінська",
    },
    GalleryItem {
        src: "/static/images/gallery/power-outlet.jpg",
        title: "Силові розетки",
        category: "outlets",
        description: "Підключення силових розеток для побутової техніки",
        location: "вул. Татарська",
    },
];

/// Gallery filter tabs: (category, label)
pub const GALLERY_CATEGORIES: &[(&str, &str)] = &[
    ("all", "Всі роботи"),
    ("wiring", "Проводка"),
    ("panels", "Електрощити"),
    ("outlets", "Розетки"),
    ("lighting", "Освітлення"),
];

/// Gallery items in a category; "all" or an unknown category yields everything.
pub fn gallery_items(category: &str) -> Vec<GalleryItem> {
    let known = GALLERY_CATEGORIES
        .iter()
        .any(|(c, _)| *c == category && *c != "all");
    GALLERY
        .iter()
        .filter(|item| !known || item.category == category)
        .copied()
        .collect()
}
