//! Fixed page copy that does not come from a store

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "no_points")]
    pub points: &'static [&'static str],
}

fn no_points(points: &&'static [&'static str]) -> bool {
    points.is_empty()
}

#[derive(Debug, Serialize)]
pub struct TestingArea {
    pub category: &'static str,
    pub capabilities: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub experience: &'static str,
    pub background: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DepartmentContact {
    pub department: &'static str,
    pub contact: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub specialty: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Hours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const HOME_STATS: [Stat; 4] = [
    Stat { label: "Years Experience", value: "25+" },
    Stat { label: "Precision Tolerance", value: "±0.0001\"" },
    Stat { label: "On-Time Delivery", value: "99.7%" },
    Stat { label: "Quality Certifications", value: "6+" },
];

pub const HOME_SERVICES: [Highlight; 4] = [
    Highlight {
        title: "CNC Machining",
        description: "5-axis precision machining with tolerances to ±0.0001\"",
        points: &[],
    },
    Highlight {
        title: "Quality Control",
        description: "CMM inspection and certified quality processes",
        points: &[],
    },
    Highlight {
        title: "Fast Turnaround",
        description: "Rapid prototyping and production scheduling",
        points: &[],
    },
    Highlight {
        title: "Material Expertise",
        description: "Wide range of metals and engineering plastics",
        points: &[],
    },
];

pub const PROCESS_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Advanced Quality Control",
        description: "CMM inspection, laser scanning, and statistical process control",
        points: &[
            "±0.0001\" measurement accuracy",
            "3D scanning verification",
            "Real-time SPC monitoring",
            "Certificate of compliance",
        ],
    },
    Highlight {
        title: "Material Expertise",
        description: "Comprehensive knowledge of engineering materials and applications",
        points: &[
            "Aerospace alloys",
            "Medical grade materials",
            "High-temp resistant",
            "Custom material sourcing",
        ],
    },
    Highlight {
        title: "Production Flexibility",
        description: "From prototype to high-volume production with rapid turnaround",
        points: &[
            "24-hour prototype",
            "Scalable production",
            "Lean manufacturing",
            "Just-in-time delivery",
        ],
    },
];

pub const QUALITY_PROCESSES: [Highlight; 3] = [
    Highlight {
        title: "Incoming Inspection",
        description: "All raw materials verified against specifications before production",
        points: &[
            "Material certification review",
            "Dimensional verification",
            "Chemical composition analysis",
            "Surface condition inspection",
        ],
    },
    Highlight {
        title: "In-Process Control",
        description: "Continuous monitoring throughout manufacturing operations",
        points: &[
            "First article inspection",
            "Statistical process control",
            "Real-time monitoring",
            "Operator verification checks",
        ],
    },
    Highlight {
        title: "Final Inspection",
        description: "Comprehensive validation before shipment approval",
        points: &[
            "CMM dimensional inspection",
            "Surface finish verification",
            "Functional testing",
            "Certificate of conformance",
        ],
    },
];

pub const TESTING_AREAS: [TestingArea; 4] = [
    TestingArea {
        category: "Dimensional Testing",
        capabilities: &[
            "Coordinate Measuring Machine (CMM)",
            "Laser measurement systems",
            "Vision measurement systems",
            "Gauge pin and plug measurements",
            "Thread pitch verification",
        ],
    },
    TestingArea {
        category: "Material Testing",
        capabilities: &[
            "Hardness testing (Rockwell, Vickers)",
            "Tensile strength testing",
            "Chemical composition analysis",
            "Grain structure evaluation",
            "Stress relief verification",
        ],
    },
    TestingArea {
        category: "Surface Analysis",
        capabilities: &[
            "Surface roughness measurement",
            "Coating thickness verification",
            "Porosity inspection",
            "Visual inspection standards",
            "Dye penetrant testing",
        ],
    },
    TestingArea {
        category: "Environmental Testing",
        capabilities: &[
            "Temperature cycling",
            "Humidity resistance",
            "Salt spray testing",
            "Vibration testing",
            "Shock testing",
        ],
    },
];

pub const MILESTONES: [Milestone; 7] = [
    Milestone {
        year: 1999,
        title: "Company Founded",
        description: "Precision Works established with focus on small-batch precision machining",
    },
    Milestone {
        year: 2003,
        title: "ISO 9001 Certified",
        description: "Achieved first quality certification, establishing foundation for systematic quality",
    },
    Milestone {
        year: 2008,
        title: "Facility Expansion",
        description: "Doubled manufacturing space and added advanced CNC machining centers",
    },
    Milestone {
        year: 2012,
        title: "Aerospace Certification",
        description: "AS9100 certification opened aerospace and defense market opportunities",
    },
    Milestone {
        year: 2016,
        title: "Medical Device Focus",
        description: "ISO 13485 certification enabled entry into medical device manufacturing",
    },
    Milestone {
        year: 2020,
        title: "Digital Integration",
        description: "Implemented Industry 4.0 technologies for enhanced efficiency and quality",
    },
    Milestone {
        year: 2024,
        title: "Continuous Innovation",
        description: "Leading precision manufacturing with cutting-edge technology and processes",
    },
];

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Michael Johnson",
        role: "President & CEO",
        experience: "25+ years manufacturing leadership",
        background: "Aerospace engineering background with expertise in precision manufacturing and quality systems.",
    },
    TeamMember {
        name: "Sarah Chen",
        role: "VP of Operations",
        experience: "20+ years operations management",
        background: "Lean manufacturing specialist focused on process optimization and efficiency improvement.",
    },
    TeamMember {
        name: "David Rodriguez",
        role: "Quality Manager",
        experience: "18+ years quality assurance",
        background: "Six Sigma Black Belt with extensive experience in aerospace and medical quality standards.",
    },
    TeamMember {
        name: "Jennifer Kim",
        role: "Engineering Manager",
        experience: "15+ years design & manufacturing",
        background: "Mechanical engineer specializing in DFM and advanced manufacturing processes.",
    },
];

pub const VALUES: [Highlight; 6] = [
    Highlight {
        title: "Precision",
        description: "Uncompromising commitment to accuracy and attention to detail in every component we manufacture.",
        points: &[],
    },
    Highlight {
        title: "Quality",
        description: "Systematic approach to quality management ensuring consistent excellence and continuous improvement.",
        points: &[],
    },
    Highlight {
        title: "Reliability",
        description: "Dependable delivery performance and consistent results that our customers can count on.",
        points: &[],
    },
    Highlight {
        title: "Innovation",
        description: "Embracing new technologies and processes to improve capabilities and manufacturing efficiency.",
        points: &[],
    },
    Highlight {
        title: "Partnership",
        description: "Collaborative approach that makes us an extension of our customers' engineering teams.",
        points: &[],
    },
    Highlight {
        title: "Integrity",
        description: "Honest communication, transparent processes, and ethical business practices in all relationships.",
        points: &[],
    },
];

pub const CONTACT_METHODS: [ContactMethod; 3] = [
    ContactMethod {
        title: "Phone",
        description: "Speak directly with our team",
        value: "(555) 123-4567",
        href: "tel:+15551234567",
        availability: "Mon-Fri 7AM-6PM, Emergency 24/7",
    },
    ContactMethod {
        title: "Email",
        description: "Send us a message anytime",
        value: "info@precisionworks.com",
        href: "mailto:info@precisionworks.com",
        availability: "Responses within 2 hours during business days",
    },
    ContactMethod {
        title: "Location",
        description: "Visit our manufacturing facility",
        value: "1234 Industrial Drive\nManufacturing City, MC 12345",
        href: "https://maps.google.com",
        availability: "Tours available by appointment",
    },
];

pub const DEPARTMENTS: [DepartmentContact; 4] = [
    DepartmentContact {
        department: "Sales & Quotes",
        contact: "Mike Thompson",
        phone: "(555) 123-4570",
        email: "quotes@precisionworks.com",
        specialty: "New project inquiries and pricing",
    },
    DepartmentContact {
        department: "Engineering Support",
        contact: "Sarah Chen",
        phone: "(555) 123-4571",
        email: "engineering@precisionworks.com",
        specialty: "Technical questions and design review",
    },
    DepartmentContact {
        department: "Quality Assurance",
        contact: "David Rodriguez",
        phone: "(555) 123-4572",
        email: "quality@precisionworks.com",
        specialty: "Quality concerns and certifications",
    },
    DepartmentContact {
        department: "Production Support",
        contact: "Jennifer Kim",
        phone: "(555) 123-4573",
        email: "production@precisionworks.com",
        specialty: "Order status and scheduling",
    },
];

pub const BUSINESS_HOURS: [Hours; 4] = [
    Hours { days: "Monday - Friday", hours: "7:00 AM - 6:00 PM" },
    Hours { days: "Saturday", hours: "8:00 AM - 2:00 PM" },
    Hours { days: "Sunday", hours: "Emergency Only" },
    Hours { days: "Emergency Service", hours: "24/7 Available" },
];
