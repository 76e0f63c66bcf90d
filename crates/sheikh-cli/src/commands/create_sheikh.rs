//! Sheikh 계정 생성 명령어.
//!
//! # 사용 예시
//!
//! ```bash
//! sheikh create-sheikh sheikh001 "الشيخ محمد أحمد" "demo123"
//! ```

use sheikh_core::{provision, AuthResult, ProvisionRequest, ProvisionedAccount, UserStore};

/// 계정을 만들고 운영자 확인용 요약을 출력합니다.
pub async fn run(
    store: &dyn UserStore,
    unique_id: &str,
    name: &str,
    password: &str,
) -> AuthResult<ProvisionedAccount> {
    println!("Creating sheikh account...");
    println!("UniqueID: {}", unique_id);
    println!("Name: {}", name);

    let account = provision(
        store,
        ProvisionRequest {
            unique_id: unique_id.to_string(),
            display_name: name.to_string(),
            password: password.to_string(),
        },
    )
    .await?;

    println!();
    println!("✅ Sheikh account created successfully!");
    println!("UID: {}", account.uid);
    println!("UniqueID: {}", account.unique_id);
    println!("Password: {}", account.password);
    println!();
    println!("You can now log in as this sheikh using the uniqueId and password.");

    Ok(account)
}
