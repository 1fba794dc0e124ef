pub const IMAGES_ROUTE: &str = "/images";
