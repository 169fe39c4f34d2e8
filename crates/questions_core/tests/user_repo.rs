use questions_core::{
    Question, QuestionLike, QuestionLikeRepository, QuestionRepository, QuestionsDatabase,
    RepoError, Reply, ReplyRepository, SqliteQuestionLikeRepository, SqliteQuestionRepository,
    SqliteReplyRepository, SqliteUserRepository, User, UserRepository,
};

#[test]
fn create_then_find_by_id_roundtrip() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);

    let mut user = User::new("Ada", "Lovelace");
    let id = users.create(&mut user).unwrap();
    assert_eq!(user.id, Some(id));

    let loaded = users.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.id, Some(id));
    assert_eq!(loaded.fname, "Ada");
    assert_eq!(loaded.lname, "Lovelace");
}

#[test]
fn find_by_id_returns_none_for_missing_row() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    assert!(users.find_by_id(404).unwrap().is_none());
}

#[test]
fn find_by_name_matches_both_names() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let ada = create_user(&users, "Ada", "Lovelace");
    create_user(&users, "Ada", "Byron");

    let found = users.find_by_name("Ada", "Lovelace").unwrap().unwrap();
    assert_eq!(found.id, ada.id);
    assert!(users.find_by_name("Ada", "King").unwrap().is_none());
}

#[test]
fn update_overwrites_row_and_is_idempotent() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let mut user = create_user(&users, "Ada", "Byron");

    user.lname = "Lovelace".to_string();
    users.update(&user).unwrap();
    let once = users.find_by_id(user.id.unwrap()).unwrap().unwrap();
    users.update(&user).unwrap();
    let twice = users.find_by_id(user.id.unwrap()).unwrap().unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.lname, "Lovelace");
}

#[test]
fn create_on_saved_user_is_misuse() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let mut user = create_user(&users, "Ada", "Lovelace");
    let id = user.id.unwrap();

    let err = users.create(&mut user).unwrap_err();
    assert!(err.is_misuse());
    assert!(matches!(err, RepoError::AlreadyPersisted { table: "users", id: got } if got == id));
}

#[test]
fn update_on_unsaved_user_is_misuse() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);

    let err = users.update(&User::new("Ada", "Lovelace")).unwrap_err();
    assert!(matches!(err, RepoError::NotPersisted { table: "users" }));
}

#[test]
fn update_of_vanished_row_returns_not_found() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);

    let mut ghost = User::new("Ghost", "User");
    ghost.id = Some(77);
    let err = users.update(&ghost).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { table: "users", id: 77 }));
}

#[test]
fn save_creates_then_updates() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);

    let mut user = User::new("Charles", "Babbage");
    let id = users.save(&mut user).unwrap();
    assert_eq!(user.id, Some(id));

    user.fname = "Chuck".to_string();
    assert_eq!(users.save(&mut user).unwrap(), id);
    assert_eq!(users.find_by_id(id).unwrap().unwrap().fname, "Chuck");

    let count = db.execute("SELECT id FROM users;", []).unwrap().len();
    assert_eq!(count, 1);
}

#[test]
fn authored_questions_and_replies_are_empty_when_none_exist() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let user = create_user(&users, "Quiet", "Person");

    assert!(users.authored_questions(&user).unwrap().is_empty());
    assert!(users.authored_replies(&user).unwrap().is_empty());
    assert!(users.followed_questions(&user).unwrap().is_empty());
    assert!(users.liked_questions(&user).unwrap().is_empty());
}

#[test]
fn authored_content_is_listed_oldest_first() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let questions = SqliteQuestionRepository::new(&db);
    let replies = SqliteReplyRepository::new(&db);

    let author = create_user(&users, "Ada", "Lovelace");
    let other = create_user(&users, "Alan", "Turing");
    let author_id = author.id.unwrap();

    let mut first = Question::new("Q1", "B1", author_id);
    let mut second = Question::new("Q2", "B2", author_id);
    let mut foreign = Question::new("Q3", "B3", other.id.unwrap());
    questions.create(&mut first).unwrap();
    questions.create(&mut second).unwrap();
    questions.create(&mut foreign).unwrap();

    let mut reply = Reply::new(foreign.id.unwrap(), None, author_id, "answer");
    replies.create(&mut reply).unwrap();

    let authored = users.authored_questions(&author).unwrap();
    assert_eq!(authored, vec![first, second]);
    assert_eq!(users.authored_replies(&author).unwrap(), vec![reply]);
}

#[test]
fn traversals_on_unsaved_user_are_misuse() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let unsaved = User::new("Not", "Saved");

    assert!(users.authored_questions(&unsaved).unwrap_err().is_misuse());
    assert!(users.liked_questions(&unsaved).unwrap_err().is_misuse());
    assert!(users.average_karma(&unsaved).unwrap_err().is_misuse());
}

#[test]
fn average_karma_divides_likes_by_questions() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let questions = SqliteQuestionRepository::new(&db);
    let likes = SqliteQuestionLikeRepository::new(&db);

    let author = create_user(&users, "Ada", "Lovelace");
    let fans: Vec<User> = ["A", "B", "C"]
        .iter()
        .map(|name| create_user(&users, name, "Fan"))
        .collect();

    let mut popular = Question::new("Popular", "liked", author.id.unwrap());
    let mut ignored = Question::new("Ignored", "not liked", author.id.unwrap());
    questions.create(&mut popular).unwrap();
    questions.create(&mut ignored).unwrap();

    for fan in &fans {
        let mut like = QuestionLike::new(popular.id.unwrap(), fan.id.unwrap());
        likes.create(&mut like).unwrap();
    }

    let karma = users.average_karma(&author).unwrap();
    assert!((karma - 1.5).abs() < f64::EPSILON);
}

#[test]
fn average_karma_without_questions_is_zero() {
    let db = QuestionsDatabase::open_in_memory().unwrap();
    let users = SqliteUserRepository::new(&db);
    let user = create_user(&users, "No", "Questions");

    assert_eq!(users.average_karma(&user).unwrap(), 0.0);
}

fn create_user(users: &SqliteUserRepository<'_>, fname: &str, lname: &str) -> User {
    let mut user = User::new(fname, lname);
    users.create(&mut user).unwrap();
    user
}
