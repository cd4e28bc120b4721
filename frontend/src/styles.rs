pub const MAIN: &str = "pt-16 w-full";
pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-stone-50/80 dark:bg-stone-900/80 backdrop-blur border-b border-red-900/20";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "font-serif text-2xl tracking-widest text-red-800 dark:text-red-400";
pub const NAV_ITEMS: &str = "flex items-center space-x-6";
pub const NAV_LINK: &str = "font-serif text-base text-stone-600 dark:text-stone-300 hover:text-red-700 dark:hover:text-red-400 transition-colors";
pub const NAV_LINK_ACTIVE: &str = "text-red-800 dark:text-red-400 border-b-2 border-red-800 dark:border-red-400";
pub const CARD: &str = "bg-amber-50 dark:bg-stone-800 rounded-md border border-amber-200/60 dark:border-stone-700 p-8";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center px-5 py-2 rounded-md font-serif text-amber-50 bg-red-800 hover:bg-red-700 transition-colors";
pub const TEXT_H1: &str = "font-serif text-3xl tracking-wide text-stone-900 dark:text-amber-50";
pub const TEXT_BODY: &str = "font-serif text-lg leading-loose text-stone-700 dark:text-stone-300";
pub const TEXT_SMALL: &str = "text-sm text-stone-500 dark:text-stone-400";
