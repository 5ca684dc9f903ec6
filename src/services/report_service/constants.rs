// Fixed, ordered audit allow-lists. Order here is display order.

pub struct MetricDef {
    pub id: &'static str,
    pub audit_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const KEY_METRICS: [MetricDef; 6] = [
    MetricDef {
        id: "first-contentful-paint",
        audit_id: "first-contentful-paint",
        title: "First Contentful Paint",
        description: "First Contentful Paint marks the time at which the first text or image is painted.",
    },
    MetricDef {
        id: "largest-contentful-paint",
        audit_id: "largest-contentful-paint",
        title: "Largest Contentful Paint",
        description: "Largest Contentful Paint marks the time at which the largest text or image is painted.",
    },
    // lab runs have no real input, max-potential-fid stands in for FID
    MetricDef {
        id: "first-input-delay",
        audit_id: "max-potential-fid",
        title: "First Input Delay",
        description: "First Input Delay measures the time from when a user first interacts with a page to the time when the browser is actually able to begin processing event handlers.",
    },
    MetricDef {
        id: "cumulative-layout-shift",
        audit_id: "cumulative-layout-shift",
        title: "Cumulative Layout Shift",
        description: "Cumulative Layout Shift measures the movement of visible elements within the viewport.",
    },
    MetricDef {
        id: "speed-index",
        audit_id: "speed-index",
        title: "Speed Index",
        description: "Speed Index shows how quickly the contents of a page are visibly populated.",
    },
    MetricDef {
        id: "total-blocking-time",
        audit_id: "total-blocking-time",
        title: "Total Blocking Time",
        description: "Sum of all time periods between FCP and Time to Interactive, when task length exceeded 50ms.",
    },
];

pub const OPPORTUNITY_AUDITS: [&str; 16] = [
    "render-blocking-resources",
    "unused-css-rules",
    "unused-javascript",
    "modern-image-formats",
    "offscreen-images",
    "unminified-css",
    "unminified-javascript",
    "efficient-animated-content",
    "duplicated-javascript",
    "legacy-javascript",
    "uses-optimized-images",
    "uses-webp-images",
    "uses-responsive-images",
    "preload-lcp-image",
    "reduce-unused-css",
    "prioritize-lcp-image",
];

pub const DIAGNOSTIC_AUDITS: [&str; 12] = [
    "mainthread-work-breakdown",
    "bootup-time",
    "uses-long-cache-ttl",
    "total-byte-weight",
    "dom-size",
    "critical-request-chains",
    "user-timings",
    "network-requests",
    "network-rtt",
    "network-server-latency",
    "third-party-summary",
    "lcp-lazy-loaded",
];

pub const ACCESSIBILITY_AUDITS: [&str; 24] = [
    "color-contrast",
    "image-alt",
    "label",
    "link-name",
    "button-name",
    "document-title",
    "html-has-lang",
    "html-lang-valid",
    "meta-description",
    "heading-order",
    "landmark-one-main",
    "list",
    "listitem",
    "definition-list",
    "dlitem",
    "bypass",
    "focus-traps",
    "focusable-controls",
    "interactive-element-affordance",
    "logical-tab-order",
    "managed-focus",
    "offscreen-content-hidden",
    "use-landmarks",
    "visual-order-follows-dom",
];

// (category id, display title)
pub const CATEGORIES: [(&str, &str); 4] = [
    ("performance", "Performance"),
    ("accessibility", "Accessibility"),
    ("best-practices", "Best Practices"),
    ("seo", "SEO"),
];

pub const MAX_RESOURCE_ITEMS: usize = 5;
pub const MAX_PASSED_AUDITS: usize = 20;
pub const NOT_AVAILABLE: &str = "N/A";
