use super::domain::PackTier;

pub const TECH_ESSENTIALS: &[&str] = &[
    "Laptop",
    "Laptop Charger",
    "Phone",
    "Phone Charging Cable",
    "Headphones",
    "Power Bank",
];

pub const EVERYDAY_CARRY: &[&str] = &["Wallet", "Keys", "Notebook", "Pen", "Water Bottle"];

pub const WORK_GEAR_BASE: &[&str] = &[
    "USB-C Hub/Adapter",
    "HDMI Cable",
    "External Mouse",
    "Laptop Stand (portable)",
];

pub const WORK_GEAR_DESK_SETUP: &[&str] = &[
    "External Keyboard",
    "Second Monitor Cable",
    "Webcam (if needed)",
    "Microphone (if needed)",
];

pub const CLOTHING_SHORT: &[&str] = &[
    "1-2 Shirts",
    "1 Pants",
    "2-3 Underwear",
    "2-3 Socks",
    "1 Sleepwear",
];

pub const CLOTHING_EXTENDED: &[&str] = &[
    "3-5 Shirts (mix casual/work)",
    "2 Pants",
    "5-7 Underwear",
    "5-7 Socks",
    "1-2 Sleepwear",
    "1 Light Jacket",
];

pub const CLOTHING_CAPSULE: &[&str] = &["1 Athletic Wear Set", "1 Smart Casual Outfit"];

pub const TOILETRIES_SHORT: &[&str] = &[
    "Travel-size Toothpaste",
    "Toothbrush",
    "Travel Shampoo/Soap",
    "Deodorant",
    "Basic Skincare",
];

pub const TOILETRIES_EXTENDED: &[&str] = &[
    "Full-size Toiletries",
    "Toothbrush & Toothpaste",
    "Shampoo & Conditioner",
    "Body Wash",
    "Deodorant",
    "Skincare Products",
    "Medications",
    "First Aid Kit",
    "Sunscreen",
];

pub const TRAVEL_ESSENTIALS: &[&str] = &[
    "Universal Travel Adapter",
    "Packable Daypack",
    "E-Reader/Books",
    "Travel Documents",
    "Backup Credit Card",
];

pub const OPTIONAL_EXTRAS: &[&str] = &[
    "Camera",
    "Portable Speaker",
    "Travel Pillow",
    "Eye Mask & Earplugs",
    "Reusable Shopping Bag",
];

pub const SHOP_URL: &str = "https://fikacarry.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackModel {
    pub name: &'static str,
    pub url: &'static str,
    pub capacity: &'static str,
}

const TODAY_SHIFT_16L: PackModel = PackModel {
    name: "Today Shift 16L II",
    url: "https://fikacarry.com/products/today-shift-16l-ii",
    capacity: "16L",
};

const WEEK_GO_FLEX: PackModel = PackModel {
    name: "Week Go 16L/22L",
    url: "https://fikacarry.com/products/week-go-16l-22l",
    capacity: "16L-22L",
};

// Same product page as the flex pack; the 22L configuration is a size option.
const WEEK_GO_22L: PackModel = PackModel {
    name: "Week Go 22L",
    url: "https://fikacarry.com/products/week-go-16l-22l",
    capacity: "22L",
};

pub const fn pack_model(tier: PackTier) -> PackModel {
    match tier {
        PackTier::Compact => TODAY_SHIFT_16L,
        PackTier::Flex => WEEK_GO_FLEX,
        PackTier::Extended => WEEK_GO_22L,
    }
}
