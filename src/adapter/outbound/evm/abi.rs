//! Contract interfaces consumed by the client.

use alloy_sol_types::sol;

// Betting contract read surface
sol! {
    #[sol(rpc)]
    contract Betting {
        struct UserBet {
            uint256 amount;
            uint256 averageRatio;
            uint256 betId;
        }

        function betCount() external view returns (uint256);

        function bets(uint256 id) external view returns (
            string memory optionATitle,
            string memory optionBTitle,
            string memory description,
            string memory imageHash,
            uint256 currentARatio,
            uint256 currentBRatio,
            uint256 currentTotalAAmount,
            uint256 currentTotalBAmount,
            bool closed,
            bool aWon
        );

        function getUserBets(bool isOptionA) external view returns (UserBet[] memory);
    }
}

// ERC-20 interface (minimal for balance display)
sol! {
    #[sol(rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
    }
}
