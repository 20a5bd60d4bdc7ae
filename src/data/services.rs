use serde::Serialize;

use super::site::Faq;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub benefits: &'static [&'static str],
    pub process: &'static [&'static str],
    pub primary_image: &'static str,
    pub faqs: &'static [Faq],
    pub seo_keywords: &'static [&'static str],
}

pub static SERVICES: &[Service] = &[
    Service {
        id: "facebook-posts-with-image",
        title: "Facebook Posts with Image",
        short_title: "Facebook Posts",
        description: "Professional Facebook posts with eye-catching images that engage your audience and drive interaction.",
        long_description: "Our Facebook post service delivers professionally crafted content paired with stunning visuals designed to capture attention in crowded feeds. Each post is strategically created to align with your brand voice, engage your target audience, and drive meaningful interactions. We handle everything from concept development to final publication, ensuring your Facebook presence remains consistent, professional, and effective.",
        benefits: &[
            "Increased engagement and reach",
            "Professional, on-brand imagery",
            "Consistent posting schedule",
            "Strategic content planning",
            "Audience growth and retention",
        ],
        process: &[
            "Brand and audience analysis",
            "Content strategy development",
            "Professional image creation",
            "Engaging copy writing",
            "Strategic posting and optimization",
        ],
        primary_image: "/images/Facebook_Event_CoverSubheadingPeople_celebrating_outdoor_festival_0001.jpg",
        faqs: &[
            Faq {
                question: "How many Facebook posts are included in your service?",
                answer: "Our standard package includes 12 professionally designed posts per month, but we offer flexible options based on your specific needs and goals.",
            },
            Faq {
                question: "Do you handle posting or just provide the content?",
                answer: "We offer both options. We can provide the content for you to post, or we can handle the entire process including scheduling and publishing at optimal times.",
            },
            Faq {
                question: "Can I request specific themes or topics for my Facebook posts?",
                answer: "Absolutely! We work closely with you to understand your preferences and incorporate your ideas into our content strategy.",
            },
            Faq {
                question: "How do you measure the success of Facebook posts?",
                answer: "We track key metrics including engagement rate, reach, clicks, and conversions. Monthly reports are provided to show the performance of your content.",
            },
        ],
        seo_keywords: &[
            "professional Facebook posts",
            "Facebook content creation",
            "Facebook marketing service",
            "social media content production",
            "Facebook image posts",
            "Facebook engagement strategy",
        ],
    },
    Service {
        id: "instagram-posts-with-image",
        title: "Instagram Posts with Image",
        short_title: "Instagram Posts",
        description: "Stunning Instagram content that captures attention and builds your brand's visual identity.",
        long_description: "Our Instagram post service delivers visually striking content designed specifically for Instagram's unique environment. We create eye-catching images and compelling captions that resonate with your target audience and reflect your brand's personality. From lifestyle shots to product features, our team ensures each post contributes to a cohesive and attractive Instagram feed that builds brand recognition and follower engagement.",
        benefits: &[
            "Visually cohesive feed aesthetic",
            "Increased follower engagement",
            "Professional photography and editing",
            "Strategic hashtag research",
            "Brand consistency across posts",
        ],
        process: &[
            "Visual style development",
            "Content calendar creation",
            "Professional photography/design",
            "Caption and hashtag optimization",
            "Performance analysis and refinement",
        ],
        primary_image: "/images/Instagram_Sunset_PhotographySubheadingBeach_silhouette_golden_hour_0001.jpg",
        faqs: &[
            Faq {
                question: "How do you ensure my Instagram has a consistent aesthetic?",
                answer: "We develop a visual style guide specific to your brand and maintain consistent editing techniques, color palettes, and composition styles across all content.",
            },
            Faq {
                question: "Do you create Instagram Stories as well as regular posts?",
                answer: "Yes, our Instagram service includes both feed posts and Stories content to provide a comprehensive approach to your Instagram presence.",
            },
            Faq {
                question: "Can you incorporate my products into the Instagram content?",
                answer: "Absolutely! We specialize in creating attractive product photography and lifestyle imagery that showcases your products in their best light.",
            },
            Faq {
                question: "How many Instagram posts do you provide each month?",
                answer: "Our standard package includes 15 Instagram posts per month, including a mix of feed posts and Stories content. Custom packages are available based on your needs.",
            },
        ],
        seo_keywords: &[
            "Instagram content creation",
            "professional Instagram posts",
            "Instagram marketing service",
            "Instagram photography",
            "Instagram feed aesthetic",
            "Instagram growth strategy",
        ],
    },
    Service {
        id: "pinterest-posts-with-image",
        title: "Pinterest Posts with Image",
        short_title: "Pinterest Posts",
        description: "Strategic Pinterest content that drives traffic and creates lasting engagement through beautiful, shareable pins.",
        long_description: "Our Pinterest service creates visually compelling pins designed to perform well in Pinterest's unique search and discovery environment. We develop pin designs that stand out in feeds, encourage saves and clicks, and drive traffic to your website or products. Our approach combines beautiful imagery with strategic keywords and descriptions to ensure your content reaches the right audience and continues to generate engagement over time.",
        benefits: &[
            "Increased website traffic",
            "Long-term content visibility",
            "Higher conversion rates",
            "Expanded audience reach",
            "Brand awareness through saves and shares",
        ],
        process: &[
            "Pinterest audience research",
            "Keyword and trend analysis",
            "Pin design and optimization",
            "Board organization strategy",
            "Performance tracking and refinement",
        ],
        primary_image: "/images/Pinterest_Home_Decor_InspirationSubheadingCozy_living_room_natural_light_0001.jpg",
        faqs: &[
            Faq {
                question: "How is Pinterest different from other social platforms?",
                answer: "Pinterest functions more as a visual search engine than a traditional social network. Content has a much longer lifespan, often continuing to drive traffic months or even years after posting.",
            },
            Faq {
                question: "What types of businesses benefit most from Pinterest?",
                answer: "While Pinterest works well for many industries, businesses in home decor, fashion, food, travel, beauty, crafts, and lifestyle niches typically see the strongest results.",
            },
            Faq {
                question: "How many pins do you create each month?",
                answer: "Our standard package includes 20 custom-designed pins per month, strategically created to target different keywords and audience segments.",
            },
            Faq {
                question: "Do you handle Pinterest SEO?",
                answer: "Yes, our service includes comprehensive Pinterest SEO, including keyword research, optimized descriptions, and strategic board organization to maximize visibility.",
            },
        ],
        seo_keywords: &[
            "Pinterest marketing service",
            "Pinterest content creation",
            "Pinterest SEO",
            "Pinterest traffic strategy",
            "professional Pinterest pins",
            "Pinterest for business",
        ],
    },
    Service {
        id: "seo-blog-posts",
        title: "SEO Blog Posts",
        short_title: "SEO Blogs",
        description: "Professionally written, SEO-optimized blog content that ranks well and engages your target audience.",
        long_description: "Our SEO blog post service delivers high-quality, thoroughly researched content designed to rank well in search engines while providing genuine value to your readers. Each article is strategically planned to target specific keywords and topics relevant to your industry and audience. Our experienced writers create engaging, authoritative content that establishes your expertise, answers your audience's questions, and drives organic traffic to your website.",
        benefits: &[
            "Improved search engine rankings",
            "Increased organic website traffic",
            "Enhanced brand authority",
            "Higher conversion rates",
            "Long-term content marketing assets",
        ],
        process: &[
            "Keyword research and topic selection",
            "Content outline and approval",
            "Professional writing and editing",
            "SEO optimization and formatting",
            "Publication and performance tracking",
        ],
        primary_image: "/images/Social_Media_Book_ReviewSubheadingBooks_arranged_fairy_lights_0001.jpg",
        faqs: &[
            Faq {
                question: "How long are your SEO blog posts?",
                answer: "Our standard blog posts range from 1,200 to 2,000 words, depending on the topic and keyword competition. We focus on creating comprehensive content that thoroughly addresses the search intent.",
            },
            Faq {
                question: "Do you include images in blog posts?",
                answer: "Yes, each blog post includes relevant, high-quality images with proper alt text and optimization. Custom graphics or infographics can be added for an additional fee.",
            },
            Faq {
                question: "How do you research topics for blog posts?",
                answer: "We use advanced SEO tools to identify valuable keywords with good search volume and reasonable competition. We also analyze top-ranking content to ensure our posts are more comprehensive and valuable.",
            },
            Faq {
                question: "How quickly can you deliver blog posts?",
                answer: "Our standard turnaround time is 7-10 business days per post, depending on complexity and research requirements. Rush delivery is available for an additional fee.",
            },
        ],
        seo_keywords: &[
            "SEO blog writing service",
            "SEO content creation",
            "professional blog writing",
            "keyword-optimized blog posts",
            "content marketing service",
            "SEO article writing",
        ],
    },
    Service {
        id: "topical-authority-plans",
        title: "Topical Authority Plans",
        short_title: "Authority Plans",
        description: "Comprehensive content strategies that establish your brand as an authority in your industry.",
        long_description: "Our Topical Authority Plans provide a strategic roadmap for establishing your brand as the go-to expert in your field. We develop comprehensive content clusters around core topics relevant to your business, creating a network of interlinked content that signals expertise to both users and search engines. This approach not only improves your SEO performance but builds lasting trust with your audience through consistent, valuable, authoritative content.",
        benefits: &[
            "Established industry expertise",
            "Improved search visibility across topics",
            "Higher domain authority",
            "Increased organic traffic",
            "Stronger competitive advantage",
        ],
        process: &[
            "Comprehensive topic research",
            "Content gap analysis",
            "Pillar and cluster content planning",
            "Content calendar development",
            "Implementation and performance tracking",
        ],
        primary_image: "/images/LinkedIn_Business_ConferenceSubheadingSpeaker_engaging_audience_stage_0001.jpg",
        faqs: &[
            Faq {
                question: "What exactly is topical authority?",
                answer: "Topical authority is the perceived expertise your website has on a specific subject area. Search engines recognize sites that comprehensively cover topics in depth, rewarding them with better rankings across related keywords.",
            },
            Faq {
                question: "How long does it take to build topical authority?",
                answer: "Building true topical authority is a medium to long-term strategy, typically taking 6-12 months to see significant results. However, you'll begin seeing incremental improvements much sooner.",
            },
            Faq {
                question: "How many content pieces are included in a Topical Authority Plan?",
                answer: "Our standard plans include a pillar content piece and 5-7 supporting cluster content pieces per topic. Custom plans can be developed based on your specific needs and competitive landscape.",
            },
            Faq {
                question: "Do you handle the content creation as well as the planning?",
                answer: "Yes, our service includes both strategic planning and content creation. We develop the overall strategy and then produce all the content needed to execute it effectively.",
            },
        ],
        seo_keywords: &[
            "topical authority strategy",
            "content cluster planning",
            "SEO content strategy",
            "industry authority building",
            "pillar content development",
            "comprehensive SEO plan",
        ],
    },
];

pub fn get_service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn get_all_service_ids() -> Vec<&'static str> {
    SERVICES.iter().map(|service| service.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_services_by_id() {
        let service = get_service_by_id("seo-blog-posts").expect("service exists");
        assert_eq!(service.title, "SEO Blog Posts");
        assert_eq!(service.short_title, "SEO Blogs");
        assert!(get_service_by_id("tiktok-videos").is_none());
    }

    #[test]
    fn ids_are_listed_in_order() {
        assert_eq!(
            get_all_service_ids(),
            vec![
                "facebook-posts-with-image",
                "instagram-posts-with-image",
                "pinterest-posts-with-image",
                "seo-blog-posts",
                "topical-authority-plans",
            ]
        );
    }

    #[test]
    fn every_service_is_complete() {
        for service in SERVICES {
            assert_eq!(service.benefits.len(), 5, "{}", service.id);
            assert_eq!(service.process.len(), 5, "{}", service.id);
            assert_eq!(service.faqs.len(), 4, "{}", service.id);
            assert!(!service.seo_keywords.is_empty(), "{}", service.id);
            assert!(service.primary_image.starts_with("/images/"), "{}", service.id);
        }
    }
}
