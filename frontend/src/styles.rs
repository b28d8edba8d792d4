pub const CONTAINER: &str = "min-h-screen bg-slate-900 text-white w-full";
pub const PAGE: &str = "pt-20 pb-24 px-4 w-full max-w-md mx-auto space-y-6";
pub const NAV: &str = "fixed top-0 left-0 right-0 z-40 p-4 bg-slate-900/80 backdrop-blur-sm border-b border-slate-700/50 flex items-center justify-between";
pub const NAV_TITLE: &str = "text-lg font-bold";
pub const NAV_BADGE: &str = "bg-slate-800 inline-block px-3 py-1 rounded-lg text-sm";
pub const BOTTOM_NAV: &str = "fixed bottom-0 left-0 right-0 z-40 bg-slate-900/90 backdrop-blur-sm border-t border-slate-700/50 flex justify-around py-3";
pub const BOTTOM_NAV_LINK: &str = "text-sm font-medium text-slate-400 hover:text-white transition-colors duration-200";

pub const CARD: &str = "bg-slate-800 p-4 rounded-lg space-y-3";
pub const CARD_TITLE: &str = "font-semibold text-white";
pub const ALERT_SUCCESS: &str = "bg-green-900/50 border border-green-800 rounded-lg p-3 text-sm text-green-200";
pub const ALERT_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-3 text-sm text-red-200";
pub const ALERT_WARNING: &str = "p-3 text-sm text-yellow-400 rounded-lg bg-slate-800";

pub const BUTTON_PRIMARY: &str = "w-full bg-green-500 text-white font-bold py-3 px-6 rounded-lg text-lg hover:bg-green-600 transition-all duration-300 disabled:bg-slate-600 disabled:cursor-not-allowed";
pub const BUTTON_SPIN: &str = "flex-1 bg-green-500 text-white font-bold py-3 px-6 rounded-lg text-lg hover:bg-green-600 transition-all duration-300 disabled:bg-slate-600 disabled:cursor-not-allowed";
pub const BUTTON_AUTO: &str = "flex-1 bg-blue-500 text-white font-bold py-3 px-6 rounded-lg text-lg hover:bg-blue-600 transition-all duration-300 disabled:bg-slate-600 disabled:cursor-not-allowed";
pub const BUTTON_STOP: &str = "flex-1 bg-red-500 text-white font-bold py-3 px-6 rounded-lg text-lg hover:bg-red-600 transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "w-full mt-3 bg-green-500/20 text-green-400 font-bold py-2 rounded-lg text-sm hover:bg-green-500/40 transition-colors disabled:bg-slate-700/50 disabled:text-slate-500 disabled:cursor-not-allowed";
pub const CHIP: &str = "px-3 py-1 rounded-full text-sm border border-slate-600 text-slate-300";
pub const STORE_ITEM: &str = "flex flex-col items-center p-3 rounded-lg bg-slate-900 hover:bg-slate-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
pub const CHIP_SELECTED: &str = "px-3 py-1 rounded-full text-sm border border-green-500 bg-green-500/20 text-green-300";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-slate-900 py-2 px-3 text-white ring-1 ring-inset ring-slate-700 placeholder:text-slate-500 focus:ring-2 focus:ring-green-500";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-slate-900 py-2 px-3 text-white ring-2 ring-inset ring-red-500";
pub const SELECT: &str = "mt-2 block w-full rounded-lg bg-slate-900 py-2 px-3 text-white ring-1 ring-inset ring-slate-700";
pub const FORM: &str = "space-y-4";
pub const CHECKBOX_ROW: &str = "flex items-center space-x-2 text-sm text-slate-300";

pub const TEXT_H2: &str = "text-center text-xl font-bold text-white";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-slate-300";
pub const TEXT_SMALL: &str = "text-sm text-slate-400";
pub const TEXT_HINT: &str = "text-xs text-slate-500 mt-1";
pub const TEXT_ERROR: &str = "text-sm text-red-400";
pub const TEXT_ACCENT: &str = "font-bold text-green-400";
pub const PRICE_TOTAL: &str = "flex items-center justify-between text-lg font-bold";

pub const PROGRESS_TRACK: &str = "w-full bg-slate-700 rounded-full h-2";
pub const PROGRESS_FILL: &str = "bg-green-500 h-2 rounded-full";

pub const WHEEL_FRAME: &str = "relative w-64 h-64 mx-auto";
pub const WHEEL_DISC: &str = "relative w-full h-full rounded-full border-4 border-slate-700/50 shadow-2xl";
pub const WHEEL_POINTER: &str = "absolute top-0 left-1/2 -translate-x-1/2 -translate-y-3 z-20 w-0 h-0 border-l-[12px] border-r-[12px] border-t-[24px] border-l-transparent border-r-transparent border-t-red-500";
pub const WHEEL_HUB: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-16 h-16 bg-slate-800 rounded-full border-4 border-slate-600 flex items-center justify-center text-white font-bold tracking-widest";
pub const WHEEL_LABEL: &str = "absolute w-full h-full";
pub const WHEEL_LABEL_TEXT: &str = "absolute left-1/2 top-3 -translate-x-1/2 font-bold text-xs tracking-tighter text-white";
