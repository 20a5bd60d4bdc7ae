//! Static copy shared across pages: navigation, FAQs, testimonials and the
//! stat panels.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Card used for both the feature grid and the process steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContactInfo {
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub hours: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    address: "6210 Nolensville Pike Unit 105",
    city: "Nashville",
    state: "TN",
    zip: "37211",
    phone: "1+ 615 479-5357",
    email: "admin@gishmo.com",
    hours: "Monday - Friday: 9:00 AM - 5:00 PM CST",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", path: "/" },
    NavLink { name: "Services", path: "/services" },
    NavLink { name: "Locations", path: "/locations" },
    NavLink { name: "BMI Calculator", path: "/bmi-calculator" },
    NavLink { name: "Contact", path: "/contact" },
];

pub const SERVICE_FEATURES: &[Feature] = &[
    Feature { title: "Professional Quality", description: "High-quality content created by experienced professionals", icon: "StarIcon" },
    Feature { title: "Consistent Delivery", description: "Regular content delivery on a schedule that works for you", icon: "ClockIcon" },
    Feature { title: "Platform Optimized", description: "Content specifically designed for each social media platform", icon: "DevicePhoneMobileIcon" },
    Feature { title: "Brand Aligned", description: "Content that perfectly matches your brand voice and style", icon: "BuildingStorefrontIcon" },
    Feature { title: "Data-Driven", description: "Content strategy informed by performance analytics", icon: "ChartBarIcon" },
    Feature { title: "Fully Managed", description: "We handle everything from creation to publishing", icon: "CheckBadgeIcon" },
];

pub const PROCESS_STEPS: &[Feature] = &[
    Feature { title: "Discovery", description: "We learn about your brand, goals, and target audience", icon: "MagnifyingGlassIcon" },
    Feature { title: "Strategy", description: "We develop a custom content strategy for your business", icon: "DocumentTextIcon" },
    Feature { title: "Creation", description: "Our team creates high-quality content for your platforms", icon: "PencilIcon" },
    Feature { title: "Review", description: "You review and approve all content before publication", icon: "EyeIcon" },
    Feature { title: "Publication", description: "Content is published according to the optimal schedule", icon: "PaperAirplaneIcon" },
    Feature { title: "Analysis", description: "We track performance and refine the strategy accordingly", icon: "ChartPieIcon" },
];

pub const GENERAL_FAQS: &[Faq] = &[
    Faq {
        question: "What services does Gishmo offer?",
        answer: "Gishmo provides comprehensive social media content production services, including Facebook posts with images, Instagram posts with images, Pinterest posts with images, SEO blog posts, and topical authority plans. All our content is 100% done-for-you, meaning we handle everything from strategy to creation to optimization.",
    },
    Faq {
        question: "How does the process work?",
        answer: "Our process begins with a discovery phase where we learn about your brand, goals, and target audience. We then develop a custom content strategy, create high-quality content, and submit it for your review. Once approved, we can either deliver the content for you to publish or handle the publication process ourselves, depending on your preference.",
    },
    Faq {
        question: "Do you work with businesses in specific industries?",
        answer: "We work with businesses across various industries, including retail, professional services, healthcare, technology, food and beverage, real estate, and more. Our team adapts our approach to suit the specific needs and audience of each industry.",
    },
    Faq {
        question: "How much does your service cost?",
        answer: "Our pricing is customized based on your specific needs, including the platforms you want to target, the frequency of content, and the level of service required. We offer packages starting at $997/month, and we're happy to provide a personalized quote after learning more about your business.",
    },
    Faq {
        question: "Do you offer content for platforms other than those listed?",
        answer: "Yes! While our core services focus on Facebook, Instagram, Pinterest, and blog content, we can also create content for platforms like LinkedIn, Twitter, TikTok, and YouTube. Contact us to discuss your specific platform needs.",
    },
    Faq {
        question: "How long does it take to get started?",
        answer: "Once you've signed up, we typically begin the discovery process within 1-2 business days. The full onboarding process, including strategy development, usually takes 1-2 weeks before we begin regular content production.",
    },
    Faq {
        question: "Can I see examples of your work?",
        answer: "Absolutely! We're happy to share relevant examples from our portfolio during our initial consultation. Due to client confidentiality, some examples may be shared privately rather than on our public website.",
    },
    Faq {
        question: "Do you offer any guarantees?",
        answer: "We guarantee the quality and timeliness of our content delivery. While we can't guarantee specific results (as social media success depends on many factors), we're committed to creating content that aligns with industry best practices and is designed to help you achieve your goals.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        company: "Bloom Boutique",
        text: "Gishmo transformed our social media presence. Their Facebook posts have increased our engagement by 300% and directly led to more in-store traffic.",
        image: "/images/LinkedIn_Professional_HeadshotSubheadingBusiness_person_smiling_against_neutral_background_0001.jpg",
    },
    Testimonial {
        name: "Michael Chen",
        company: "TechNow Solutions",
        text: "The Instagram content Gishmo creates for us perfectly captures our brand voice and aesthetic. We've seen a significant increase in followers and engagement since working with them.",
        image: "/images/Social_Media_Pet_FeatureSubheadingCat_looking_majestic_window_light_0001.jpg",
    },
    Testimonial {
        name: "Jessica Williams",
        company: "Evergreen Home Decor",
        text: "Gishmo's Pinterest strategy has been a game-changer for our business. Their pins consistently drive traffic to our website and have increased our online sales by 45%.",
        image: "/images/Pinterest_Home_Decor_InspirationSubheadingCozy_living_room_natural_light_0001.jpg",
    },
    Testimonial {
        name: "David Rodriguez",
        company: "Fitness Forward",
        text: "The SEO blog posts Gishmo creates have helped us rank for key terms in our industry. Their content is engaging, informative, and perfectly aligned with our brand voice.",
        image: "/images/Instagram_Fitness_TransformationSubheadingBefore_after_split_image_gym_0001.jpg",
    },
    Testimonial {
        name: "Amanda Taylor",
        company: "Sunrise Cafe",
        text: "Gishmo's comprehensive approach to social media has transformed our online presence. Their content consistently resonates with our audience and has helped us build a loyal community.",
        image: "/images/Instagram_Story_Coffee_SharePerson_holding_phone_above_latte_art_0001.jpg",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Clients Served", description: "Businesses across various industries" },
    Stat { value: "15,000+", label: "Posts Created", description: "Across multiple social platforms" },
    Stat { value: "300%", label: "Average Engagement Increase", description: "For clients after 3 months" },
    Stat { value: "6", label: "Locations Served", description: "Across Tennessee, Kentucky, and Alabama" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::locations::LOCATIONS;

    #[test]
    fn nav_paths_are_unique_and_absolute() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            assert!(link.path.starts_with('/'), "{}", link.name);
            assert!(NAV_LINKS[i + 1..].iter().all(|other| other.path != link.path));
        }
    }

    #[test]
    fn location_stat_matches_dataset() {
        let stat = STATS.iter().find(|s| s.label == "Locations Served").expect("stat exists");
        assert_eq!(stat.value, LOCATIONS.len().to_string());
    }

    #[test]
    fn tables_are_populated() {
        assert_eq!(GENERAL_FAQS.len(), 8);
        assert_eq!(TESTIMONIALS.len(), 5);
        assert_eq!(SERVICE_FEATURES.len(), 6);
        assert_eq!(PROCESS_STEPS.len(), 6);
    }
}
