use ::rusqlite::Connection;

pub const BLOG_QUERY: &str = "
SELECT UserId, Name FROM User;
SELECT PostId, UserId, title, body FROM Post;
SELECT CommentId, PostId, UserId, Title, Body FROM Comment;
SELECT UserId, Width, Height, Url FROM Avatar;
";

pub fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    conn.execute_batch(
        "
CREATE TABLE User (UserId int, Name varchar(100));
CREATE TABLE Post (PostId int, UserId int, Title varchar(100), Body varchar(1000));
CREATE TABLE Comment (CommentId int, PostId int, UserId int, Title varchar(100), Body varchar(1000));
CREATE TABLE Avatar (AvatarId int, UserId int, Width int, Height int, Url varchar(1000));

INSERT INTO User VALUES (1, 'User1'), (2, 'User2');
INSERT INTO Post VALUES
    (1, 1, 'Post11', 'Long text 11'),
    (2, 1, 'Post12', 'Long text 12'),
    (3, 2, 'Post21', 'Long text 21'),
    (4, 2, 'Post22', 'Long text 22');
INSERT INTO Comment VALUES
    (1, 1, 2, 'Comment11', 'Lorem ipsum dolor sit amet'),
    (2, 2, 2, 'Comment12', 'consectetur adipiscing elit'),
    (3, 3, 1, 'Comment21', 'sed do eiusmod tempor incididunt'),
    (4, 4, 1, 'Comment22', 'ut labore et dolore magna aliqua'),
    (5, 4, NULL, 'AnonymousComment', 'Yo mama is so fat that...');
INSERT INTO Avatar VALUES
    (1, 1, 100, 100, 'http://example.com/img1.png'),
    (2, 2, 100, 100, 'http://example.com/img2.png');
",
    )
    .expect("Failed to populate database");
    conn
}
