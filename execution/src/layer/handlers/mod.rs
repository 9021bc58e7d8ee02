mod assistant;
mod game;
mod jackpot;
mod notification;
mod prize;
mod request;
mod tournament;
