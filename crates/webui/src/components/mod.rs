pub mod car_card;
pub mod car_detail;
pub mod car_image;
pub mod showroom_page;
