// Translated page copy and the language switcher.
//
// The switcher writes through [`TextSurface`] so it can run against the real
// document or a test double.

/// Supported page languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn bundle(self) -> &'static Bundle {
        match self {
            Language::En => &EN,
            Language::Fr => &FR,
            Language::Ar => &AR,
        }
    }
}

#[derive(Debug)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

/// All translated strings for one language.
#[derive(Debug)]
pub struct Bundle {
    pub biography: &'static str,
    pub experience_title: &'static str,
    pub management: Card,
    pub development: Card,
    pub contact_title: &'static str,
    pub contact_message: &'static str,
}

/// Fixed DOM locations that receive translated text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Biography,
    ExperienceTitle,
    ManagementTitle,
    ManagementDescription,
    DevelopmentTitle,
    DevelopmentDescription,
    ContactTitle,
    ContactMessage,
}

impl TextSlot {
    pub const ALL: [TextSlot; 8] = [
        TextSlot::Biography,
        TextSlot::ExperienceTitle,
        TextSlot::ManagementTitle,
        TextSlot::ManagementDescription,
        TextSlot::DevelopmentTitle,
        TextSlot::DevelopmentDescription,
        TextSlot::ContactTitle,
        TextSlot::ContactMessage,
    ];
}

impl Bundle {
    pub fn text(&self, slot: TextSlot) -> &'static str {
        match slot {
            TextSlot::Biography => self.biography,
            TextSlot::ExperienceTitle => self.experience_title,
            TextSlot::ManagementTitle => self.management.title,
            TextSlot::ManagementDescription => self.management.description,
            TextSlot::DevelopmentTitle => self.development.title,
            TextSlot::DevelopmentDescription => self.development.description,
            TextSlot::ContactTitle => self.contact_title,
            TextSlot::ContactMessage => self.contact_message,
        }
    }
}

/// Where the switcher writes. Implemented over the document in the web build.
pub trait TextSurface {
    fn set_text(&mut self, slot: TextSlot, text: &str);
    fn set_rtl(&mut self, rtl: bool);
    fn set_selector_active(&mut self, language: Language, active: bool);
}

#[derive(Debug, Default)]
pub struct LanguageSwitcher {
    current: Language,
}

impl LanguageSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch to `code`. Unknown codes and the current language are no-ops.
    /// Returns whether anything was written.
    pub fn select_language(&mut self, code: &str, surface: &mut impl TextSurface) -> bool {
        let Some(language) = Language::from_code(code) else {
            log::warn!("[lang] unknown language code {:?}", code);
            return false;
        };
        if language == self.current {
            return false;
        }
        self.current = language;
        let bundle = language.bundle();
        for slot in TextSlot::ALL {
            surface.set_text(slot, bundle.text(slot));
        }
        surface.set_rtl(language.is_rtl());
        for l in Language::ALL {
            surface.set_selector_active(l, l == language);
        }
        log::info!("[lang] switched to {}", language.code());
        true
    }
}

pub static EN: Bundle = Bundle {
    biography: "Hi, I'm Cheikh Hachem, a 24-year-old software developer and manager from Nouadhibou, Mauritania. Passionate about technology since the age of 4, I thrive on challenges that push my limits.",
    experience_title: "Experience",
    management: Card {
        title: "Manager",
        description: "Currently managing Clinique Nouadhibou, I combine leadership skills with a passion for improving healthcare services through technology.",
    },
    development: Card {
        title: "Developer",
        description: "I specialize in Python, JavaScript, and Flutter/Dart, creating dynamic applications and solving complex problems. I see every project as an opportunity to grow and innovate.",
    },
    contact_title: "Contact Me",
    contact_message: "Let's create something amazing together.",
};

pub static FR: Bundle = Bundle {
    biography: "Je m'appelle Cheikh Hachem, j'ai 24 ans et je suis originaire de Nouadhibou, en Mauritanie. Passionné par la technologie depuis l'âge de 4 ans, je vois chaque défi comme une occasion d'élargir mes compétences.",
    experience_title: "Expériences",
    management: Card {
        title: "Gérant",
        description: "Actuellement Gérant de la Clinique de Nouadhibou, j'utilise mes compétences en gestion et en technologie pour améliorer les services de santé.",
    },
    development: Card {
        title: "Développeur",
        description: "Spécialisé en Python, JavaScript et Flutter/Dart, je crée des applications dynamiques et je résous des problèmes complexes, chaque projet étant une opportunité de progresser et d'innover.",
    },
    contact_title: "Contactez-moi",
    contact_message: "Créons ensemble quelque chose d'extraordinaire.",
};

pub static AR: Bundle = Bundle {
    biography: "اسمي الشيخ هاشم، عمري 24 عامًا، من مواليد مدينة نواذيبو في موريتانيا. أحببت التكنولوجيا منذ سن الرابعة وأسعى دائمًا لاقتناص التحديات لتطوير مهاراتي.",
    experience_title: "الخبرات",
    management: Card {
        title: "مدير مصحة نواذيبو",
        description: "أشغل دورا بالإدارة في مصحة نواذيبو، حيث أوظف قدراتي الإدارية والتقنية لتحسين جودة الخدمات الصحية.",
    },
    development: Card {
        title: "مطور",
        description: "مختص في Python، JavaScript و Flutter/Dart، أعمل على تطوير تطبيقات ديناميكية وحل المشكلات المعقّدة، وأرى في كل مشروع فرصة للنمو والابتكار.",
    },
    contact_title: "تواصل معي",
    contact_message: "دعنا نبتكر شيئًا مميزًا معًا.",
};
