pub mod ad_credit_deposit;
pub mod campaign_form;
pub mod campaign_list;
pub mod language_picker;
pub mod notice;
pub mod progress_bar;
pub mod promo_code;
pub mod spin_store;
pub mod spin_wheel;

pub use ad_credit_deposit::AdCreditDeposit;
pub use campaign_form::CampaignForm;
pub use campaign_list::CampaignList;
pub use language_picker::LanguagePicker;
pub use notice::NoticeLine;
pub use progress_bar::ProgressBar;
pub use promo_code::PromoCodeRedeem;
pub use spin_store::SpinStore;
pub use spin_wheel::SpinWheel;
