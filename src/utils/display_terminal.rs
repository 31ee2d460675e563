//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 요약 등을 시각적으로 표현합니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              WellBite Auth Service               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Connecting to MongoDB
/// ```
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 들여쓰기된 트리 구조로 하위 항목을 출력합니다
///
/// ```text
///    ├─ Refresh token store: MongoDB
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 서버 시작 직전의 구성 요약을 출력합니다
pub fn print_startup_summary(bind_address: &str, environment: &str, denylist: &str) {
    println!();
    print_boxed_title("🎉 WELLBITE AUTH SERVICE READY");
    println!("   🌐 Listening: http://{}", bind_address);
    println!("   🏷️ Environment: {}", environment);
    println!("   🔒 Access token denylist: {}", denylist);
    println!();
}
