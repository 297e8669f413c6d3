mod bootcamp;
mod course;
mod review;
mod user;
