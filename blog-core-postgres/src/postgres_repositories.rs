use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::{
    AddressRepositoryImpl, BlogRepositoryImpl, GuestBookRepositoryImpl, PersonRepositoryImpl,
    UserRepositoryImpl,
};
use crate::service::{BlogService, GuestBookService, PersonService, UserService};

/// Entry point wiring the connection pool into the repositories.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create all repositories sharing the same connection pool.
    pub fn create_all_repositories(&self) -> Repositories {
        Repositories {
            address_repository: Arc::new(AddressRepositoryImpl::new(self.pool.clone())),
            person_repository: Arc::new(PersonRepositoryImpl::new(self.pool.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(self.pool.clone())),
            blog_repository: Arc::new(BlogRepositoryImpl::new(self.pool.clone())),
            guest_book_repository: Arc::new(GuestBookRepositoryImpl::new(self.pool.clone())),
        }
    }

    /// Create the services on top of a fresh repository set.
    pub fn create_all_services(&self) -> Services {
        let repos = self.create_all_repositories();

        Services {
            person_service: PersonService::new(
                repos.address_repository.clone(),
                repos.person_repository.clone(),
            ),
            user_service: UserService::new(
                repos.address_repository.clone(),
                repos.person_repository.clone(),
                repos.user_repository.clone(),
            ),
            blog_service: BlogService::new(repos.blog_repository.clone()),
            guest_book_service: GuestBookService::new(repos.guest_book_repository.clone()),
        }
    }
}

pub struct Repositories {
    pub address_repository: Arc<AddressRepositoryImpl>,
    pub person_repository: Arc<PersonRepositoryImpl>,
    pub user_repository: Arc<UserRepositoryImpl>,
    pub blog_repository: Arc<BlogRepositoryImpl>,
    pub guest_book_repository: Arc<GuestBookRepositoryImpl>,
}

pub struct Services {
    pub person_service: PersonService,
    pub user_service: UserService,
    pub blog_service: BlogService,
    pub guest_book_service: GuestBookService,
}
