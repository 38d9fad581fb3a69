use serde::Serialize;

/// A hardcoded site page that can be found through search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub title: &'static str,
    pub slug: &'static str,
}

pub const SITE_PAGES: &[PageDescriptor] = &[
    PageDescriptor { title: "Home", slug: "/" },
    PageDescriptor { title: "About", slug: "/about" },
    PageDescriptor { title: "Services", slug: "/services" },
    PageDescriptor { title: "Portfolio", slug: "/portfolio" },
    PageDescriptor { title: "Pricing", slug: "/pricing" },
    PageDescriptor { title: "Blog", slug: "/blog" },
    PageDescriptor { title: "Contact", slug: "/contact" },
];
