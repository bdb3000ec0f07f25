// src/content.rs

//! Static marketing content: pricing packages and service pages.

use crate::models::marketing::{PricingTier, ServiceOffering, TierKey};

const LIVING_ROOM: &str = "/assets/living-room-ceiling.jpg";
const BEDROOM: &str = "/assets/bedroom-ceiling.jpg";
const OFFICE: &str = "/assets/office-ceiling.jpg";
const COMMERCIAL: &str = "/assets/commercial-ceiling.jpg";

pub static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        key: TierKey::Basic,
        name: "Essential Package",
        price: "80",
        description: "Perfect for modern homes seeking clean, timeless design with quality materials and professional installation.",
        badge: "Essential",
        popular: false,
        features: &[
            "Quality materials sourced from trusted suppliers",
            "Clean and professional finish",
            "Standard design options to choose from",
            "Professional installation by certified team",
            "Basic warranty coverage",
            "Post-installation support",
        ],
    },
    PricingTier {
        key: TierKey::Medium,
        name: "Premium Package",
        price: "90",
        description: "Sophisticated designs with enhanced detailing, premium materials, and expert craftsmanship for discerning homeowners.",
        badge: "Premium",
        popular: true,
        features: &[
            "Premium quality materials and finishes",
            "Custom pattern designs tailored to your space",
            "Advanced LED and cove lighting integration",
            "Expert craftsmanship with attention to detail",
            "Extended warranty coverage",
            "Priority customer support",
        ],
    },
    PricingTier {
        key: TierKey::High,
        name: "Luxury Package",
        price: "110",
        description: "Ultimate luxury with bespoke architectural elements, designer finishes, and white-glove service throughout.",
        badge: "Luxury",
        popular: false,
        features: &[
            "Bespoke architectural design elements",
            "Designer-grade premium materials",
            "3D visualization and detailed planning",
            "Master craftsmen installation",
            "Comprehensive lifetime warranty",
            "Dedicated project manager and 24/7 support",
        ],
    },
];

pub static SERVICES: [ServiceOffering; 14] = [
    ServiceOffering {
        slug: "pop-false-ceiling",
        name: "POP False Ceiling",
        description: "Plaster of Paris (POP) false ceilings offer excellent versatility and durability. Perfect for creating intricate designs and curved shapes, POP ceilings are ideal for both residential and commercial spaces.",
        features: &[
            "Highly durable and long-lasting",
            "Excellent fire resistance",
            "Perfect for intricate designs",
            "Sound insulation properties",
            "Easy to repair and maintain",
            "Cost-effective solution",
        ],
        images: &[LIVING_ROOM, BEDROOM],
    },
    ServiceOffering {
        slug: "gypsum-false-ceiling",
        name: "Gypsum False Ceiling",
        description: "Gypsum board ceilings are lightweight, versatile, and perfect for modern interiors. They provide excellent acoustic insulation and are easy to install with a seamless finish.",
        features: &[
            "Lightweight and easy to install",
            "Excellent acoustic properties",
            "Fire-resistant material",
            "Smooth seamless finish",
            "Eco-friendly option",
            "Quick installation time",
        ],
        images: &[OFFICE, COMMERCIAL],
    },
    ServiceOffering {
        slug: "simple-ceiling-designs",
        name: "Simple Ceiling Designs",
        description: "Clean, minimalist ceiling designs that enhance your space without overwhelming it. Perfect for modern homes and offices seeking elegance in simplicity.",
        features: &[
            "Clean minimalist aesthetics",
            "Cost-effective solutions",
            "Quick installation",
            "Timeless appeal",
            "Easy maintenance",
            "Versatile for any space",
        ],
        images: &[BEDROOM, LIVING_ROOM],
    },
    ServiceOffering {
        slug: "wall-panel-design",
        name: "Wall Panel & Wall Design Work",
        description: "Transform your walls with stunning panel designs that complement your ceiling work. Create a cohesive look with our expert wall design services.",
        features: &[
            "3D textured panels",
            "Custom design options",
            "Premium materials",
            "Expert installation",
            "Acoustic benefits",
            "Easy to clean and maintain",
        ],
        images: &[COMMERCIAL, OFFICE],
    },
    ServiceOffering {
        slug: "ceiling-partitions",
        name: "Ceiling Partitions & Room Dividers",
        description: "Create functional spaces with elegant ceiling partitions and room dividers. Perfect for open floor plans and modern office layouts.",
        features: &[
            "Flexible space division",
            "Sound reduction",
            "Modern aesthetics",
            "Custom configurations",
            "Easy installation",
            "Removable options",
        ],
        images: &[OFFICE, COMMERCIAL],
    },
    ServiceOffering {
        slug: "commercial-ceiling",
        name: "Commercial False Ceiling Installation",
        description: "Professional false ceiling solutions for commercial spaces. Designed to meet building codes while maintaining aesthetic appeal and functionality.",
        features: &[
            "Building code compliant",
            "Large-scale projects",
            "Fire safety certified",
            "Acoustic optimization",
            "Energy efficient",
            "Minimal disruption",
        ],
        images: &[COMMERCIAL, OFFICE],
    },
    ServiceOffering {
        slug: "residential-ceiling",
        name: "Residential False Ceiling Design",
        description: "Elevate your home with custom ceiling designs tailored to your style and needs. From classic to contemporary, we create ceilings that complement your living spaces.",
        features: &[
            "Custom home designs",
            "Style consultation",
            "Quality materials",
            "Expert craftsmanship",
            "Warranty included",
            "After-sales support",
        ],
        images: &[LIVING_ROOM, BEDROOM],
    },
    ServiceOffering {
        slug: "ceiling-lighting",
        name: "Ceiling Lighting & Cove Light Design",
        description: "Illuminate your space with integrated ceiling lighting and elegant cove light designs. Create ambiance and enhance the architectural features of your ceiling.",
        features: &[
            "LED integration",
            "Cove lighting design",
            "Ambient lighting",
            "Energy efficient",
            "Customizable colors",
            "Professional wiring",
        ],
        images: &[BEDROOM, LIVING_ROOM],
    },
    ServiceOffering {
        slug: "3d-ceiling-designs",
        name: "3D Ceiling Designs",
        description: "Add depth and dimension to your space with stunning 3D ceiling designs. Create visual interest and modern aesthetics with cutting-edge techniques.",
        features: &[
            "Three-dimensional patterns",
            "Modern aesthetics",
            "Unique textures",
            "Architectural appeal",
            "Premium finish",
            "Wow factor guaranteed",
        ],
        images: &[COMMERCIAL, OFFICE],
    },
    ServiceOffering {
        slug: "office-ceiling",
        name: "Modern Office Ceiling Solutions",
        description: "Professional ceiling solutions designed for modern office environments. Enhance productivity and aesthetics with our corporate ceiling designs.",
        features: &[
            "Professional aesthetics",
            "Acoustic optimization",
            "Cable management",
            "Modular systems",
            "Easy maintenance",
            "Corporate standards",
        ],
        images: &[OFFICE, COMMERCIAL],
    },
    ServiceOffering {
        slug: "pvc-ceiling",
        name: "PVC Ceiling Installation",
        description: "Durable, moisture-resistant PVC ceiling solutions perfect for kitchens, bathrooms, and high-humidity areas. Easy to maintain and long-lasting.",
        features: &[
            "Waterproof material",
            "Easy to clean",
            "Termite resistant",
            "Long-lasting",
            "Quick installation",
            "Affordable option",
        ],
        images: &[BEDROOM, LIVING_ROOM],
    },
    ServiceOffering {
        slug: "acoustic-ceiling",
        name: "Acoustic & Soundproof Ceilings",
        description: "Reduce noise and improve sound quality with our acoustic ceiling solutions. Perfect for home theaters, recording studios, and office spaces.",
        features: &[
            "Sound absorption",
            "Noise reduction",
            "Studio quality",
            "Multiple densities",
            "Professional installation",
            "Performance tested",
        ],
        images: &[OFFICE, COMMERCIAL],
    },
    ServiceOffering {
        slug: "ceiling-repair",
        name: "Ceiling Repair & Renovation",
        description: "Expert repair and renovation services for existing ceilings. From minor fixes to complete overhauls, we restore and enhance your ceiling's appearance.",
        features: &[
            "Damage assessment",
            "Quick repairs",
            "Seamless matching",
            "Complete renovation",
            "Quality restoration",
            "Warranty on repairs",
        ],
        images: &[LIVING_ROOM, BEDROOM],
    },
    ServiceOffering {
        slug: "luxury-ceiling",
        name: "Luxury Ceiling Design for Homes & Offices",
        description: "Premium luxury ceiling designs that make a statement. Bespoke solutions using the finest materials and expert craftsmanship for discerning clients.",
        features: &[
            "Bespoke designs",
            "Premium materials",
            "Master craftsmanship",
            "Designer consultation",
            "Exclusive finishes",
            "White-glove service",
        ],
        images: &[COMMERCIAL, BEDROOM],
    },
];

pub fn pricing_tier(key: TierKey) -> &'static PricingTier {
    // Every TierKey has exactly one entry above.
    PRICING_TIERS
        .iter()
        .find(|tier| tier.key == key)
        .unwrap_or(&PRICING_TIERS[0])
}

pub fn service(slug: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|service| service.slug == slug)
}
